//! JSON output for reachability reports.

use crate::processing::ReachReport;

/// Serialize a report as pretty-printed JSON.
///
/// Addresses, masks and networks are written dotted-decimal, `null` when absent.
pub fn report_to_json(report: &ReachReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HostForm;
    use crate::processing::reach_report;
    use serde_json::Value;

    #[test]
    fn test_report_to_json() {
        let a = HostForm::new("10.0.0.1", "8").parse();
        let b = HostForm::new("10.5.5.5", "24").parse();
        let json = report_to_json(&reach_report(&a, &b)).expect("Error serializing report");
        let value: Value = serde_json::from_str(&json).expect("Error parsing report JSON");

        assert_eq!(value["a"]["ip"], "10.0.0.1");
        assert_eq!(value["a"]["mask"], "255.0.0.0");
        assert_eq!(value["network_b"], "10.5.5.0");
        assert_eq!(value["a_sees_b"], true);
        assert_eq!(value["b_sees_a"], false);
        assert_eq!(value["reachability"], "unreachable");
    }

    #[test]
    fn test_report_to_json_incomplete() {
        let a = HostForm::new("0.0.0.0", "0").parse();
        let b = HostForm::new("", "").parse();
        let json = report_to_json(&reach_report(&a, &b)).expect("Error serializing report");
        let value: Value = serde_json::from_str(&json).expect("Error parsing report JSON");

        assert_eq!(value["a"]["ip"], "0.0.0.0");
        assert_eq!(value["network_a"], "0.0.0.0");
        assert!(value["b"]["ip"].is_null());
        assert!(value["network_b"].is_null());
        assert!(value["a_sees_b"].is_null());
        assert_eq!(value["reachability"], "unknown");
    }
}
