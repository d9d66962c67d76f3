//! Parsing of `pip list --format=freeze` output.

/// Turn listing output into sorted descriptor lines.
///
/// Blank lines and `#` comment lines (pip prints these for editable or
/// unsupported installs) are dropped.
pub fn parse_freeze_output(output: &str) -> Vec<String> {
    let mut descriptors: Vec<String> = output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect();
    descriptors.sort();
    descriptors
}
