//! Output formatting for reachability reports.
//!
//! This module handles formatting a [`crate::processing::ReachReport`]:
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::report_to_json;
pub use terminal::{format_field, format_report};
