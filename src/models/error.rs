//! Error types for IPv4 parsing and mask arithmetic.

use thiserror::Error;

/// Errors returned by the IPv4 arithmetic functions.
///
/// All of these are expected while a user is still typing, except
/// [`Ipv4Error::OutOfRange`] which usually means a caller passed a bad length.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Ipv4Error {
    #[error("Invalid IPv4 address format: {0:?}")]
    InvalidFormat(String),

    #[error("Invalid subnet mask: {:#010x} is not a contiguous run of high bits", .0)]
    InvalidMask(u32),

    #[error("Prefix length {0} is out of range (must be 0-32)")]
    OutOfRange(i64),

    #[error("No mask puts {} into network {}", crate::models::int_to_ipv4(*.ip), crate::models::int_to_ipv4(*.network))]
    NoSuchMask { ip: u32, network: u32 },
}
