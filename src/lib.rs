//! Decide whether two IPv4 hosts can talk to each other directly.
//!
//! - [`models`] - IPv4 parsing, formatting and mask arithmetic on `u32`
//! - [`processing`] - the two-host reachability check
//! - [`output`] - terminal and JSON rendering of a check
//! - [`config`] - environment configuration and logging setup

pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use models::HostForm;
use processing::{reach_report, ReachReport};

/// Parse both hosts' text fields and run the reachability check.
///
/// Invalid or empty fields never fail here, they make the verdict unknown.
pub fn check_forms(a: &HostForm, b: &HostForm) -> ReachReport {
    reach_report(&a.parse(), &b.parse())
}
