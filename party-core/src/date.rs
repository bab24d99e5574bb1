//! Date conversion for the creation form.

use chrono::NaiveDate;

use crate::error::{ApiError, ApiResult};

/// Convert a form date ("YYYY-MM-DD") into the ISO-8601 instant the service expects.
///
/// Date-only input is taken as UTC midnight, rendered with millisecond precision.
pub fn to_iso_instant(date: &str) -> ApiResult<String> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::InvalidDate(date.to_string()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ApiError::InvalidDate(date.to_string()))?
        .and_utc();
    Ok(midnight.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_calendar_date_to_utc_midnight() {
        assert_eq!(to_iso_instant("2024-01-01").unwrap(), "2024-01-01T00:00:00.000Z");
        assert_eq!(to_iso_instant("1999-12-31").unwrap(), "1999-12-31T00:00:00.000Z");
    }

    #[test]
    fn rejects_empty_and_impossible_dates() {
        assert!(matches!(to_iso_instant(""), Err(ApiError::InvalidDate(_))));
        assert!(matches!(to_iso_instant("2024-02-30"), Err(ApiError::InvalidDate(_))));
        assert!(matches!(to_iso_instant("tomorrow"), Err(ApiError::InvalidDate(_))));
    }
}
