use crate::error::{Error, Result};
use chrono::Month;

/// Parses an English month name (`"March"`, `"march"`, `"mar"`).
pub fn parse_month(raw: Option<&str>) -> Result<Month> {
    let raw = raw
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| Error::invalid_input("Month parameter is required"))?;
    raw.parse::<Month>()
        .map_err(|_| Error::invalid_input(format!("Invalid month parameter: {raw}")))
}

/// Parses a required, strictly positive pagination parameter.
pub fn parse_positive(name: &str, raw: Option<&str>) -> Result<u64> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::invalid_input(format!("{name} parameter is required")))?;
    match raw.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::invalid_input(format!(
            "{name} must be a positive integer, got {raw}"
        ))),
    }
}
