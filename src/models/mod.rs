//! Domain models for subnet reachability.
//!
//! This module contains the core data structures and arithmetic:
//! - [`ipv4`] functions - parsing, formatting and mask arithmetic on `u32`
//! - [`Host`] and [`HostForm`] - a host as entered, and the text it came from
//! - [`Ipv4Error`] - errors from parsing and mask arithmetic

mod error;
mod host;
mod ipv4;

// Re-export public types
pub use error::Ipv4Error;
pub use host::{Host, HostForm};
pub(crate) use host::serialize_dotted;
pub use ipv4::{
    int_to_ipv4, ipv4_to_int, is_ipv4, is_mask, len_from_mask, mask_from_len,
    max_mask_from_ip_network, min_mask_from_ip_network, network_from_ip_mask, MAX_LENGTH,
};
