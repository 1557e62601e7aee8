use crate::constants::REPORT_PRECISION;

/// Convert a slice of string slices into owned strings.
pub fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Format a value with the fixed number of decimals used in reports.
pub fn fmt_report(value: f64) -> String {
    format!("{:.*}", REPORT_PRECISION, value)
}
