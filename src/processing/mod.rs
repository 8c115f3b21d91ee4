//! Reachability logic built on the IPv4 arithmetic in [`crate::models`].
//!
//! - [`reach`] - the two-host reachability check and its report

mod reach;

// Re-export public functions
pub use reach::{can_communicate, reach_report, sees_as_local, ReachReport, Reachability};
