//! Terminal output utilities.
//!
//! Renders a [`ReachReport`] as a few aligned, coloured lines.

use crate::models::{int_to_ipv4, Host};
use crate::processing::{ReachReport, Reachability};
use colored::Colorize;

/// Width of the label column.
const LABEL_WIDTH: usize = 16;

/// Format a label and value as a left-aligned field.
///
/// # Arguments
/// * `label` - The label, padded to `width`
/// * `value` - The value to print after the label
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label}:");
    format!("{label:<width$} {}", value.to_string())
}

fn format_host(host: &Host, network: Option<u32>) -> String {
    match network {
        Some(network) => format!("{host} (network {})", int_to_ipv4(network)),
        None => host.to_string(),
    }
}

fn format_direction(value: Option<bool>) -> String {
    match value {
        Some(true) => "local".to_string(),
        Some(false) => "not local".to_string(),
        None => "-".to_string(),
    }
}

fn format_verdict(reachability: Reachability) -> String {
    match reachability {
        Reachability::Reachable => format!("✅ {reachability}").green().to_string(),
        Reachability::Unreachable => format!("❌ {reachability}").red().to_string(),
        Reachability::Unknown => reachability.to_string().yellow().to_string(),
    }
}

/// Render a report for the terminal, one fact per line.
pub fn format_report(report: &ReachReport) -> String {
    [
        format_field("IP 1", format_host(&report.a, report.network_a), LABEL_WIDTH),
        format_field("IP 2", format_host(&report.b, report.network_b), LABEL_WIDTH),
        format_field("IP 1 sees IP 2", format_direction(report.a_sees_b), LABEL_WIDTH),
        format_field("IP 2 sees IP 1", format_direction(report.b_sees_a), LABEL_WIDTH),
        format_field(
            "Can communicate",
            format_verdict(report.reachability),
            LABEL_WIDTH,
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HostForm;
    use crate::processing::reach_report;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("IP", "1.2.3.4", 6), "IP:    1.2.3.4");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_label", 42, 5), "long_label: 42");
    }

    #[test]
    fn test_format_report_reachable() {
        colored::control::set_override(false);
        let a = HostForm::new("192.168.1.10", "24").parse();
        let b = HostForm::new("192.168.1.20", "255.255.255.0").parse();
        let text = format_report(&reach_report(&a, &b));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "IP 1:            192.168.1.10/24 (network 192.168.1.0)"
        );
        assert_eq!(lines[2], "IP 1 sees IP 2:  local");
        assert_eq!(lines[4], "Can communicate: ✅ Yes");
    }

    #[test]
    fn test_format_report_unknown() {
        colored::control::set_override(false);
        let a = HostForm::new("192.168.1.10", "24").parse();
        let b = HostForm::new("192.168.1.", "24").parse();
        let text = format_report(&reach_report(&a, &b));
        assert!(text.contains("IP 2:            ?/24"), "{text}");
        assert!(text.contains("IP 2 sees IP 1:  -"), "{text}");
        assert!(text.ends_with("Can communicate: Unknown"), "{text}");
    }
}
