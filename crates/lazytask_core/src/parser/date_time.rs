//! User-facing date/time input format.
//!
//! Commands accept `yyyy-MM-dd HHmm` only, e.g. `2019-10-15 1800`.

use crate::error::{AppError, AppResult};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// `chrono` pattern for command date/time arguments.
pub const INPUT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H%M";

// chrono alone accepts 1-digit fields and signed years; the shape check keeps
// input to the fixed-width form.
static INPUT_DATE_TIME_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{4}$").expect("valid date/time regex"));

const FORMAT_HINT: &str = "Oops, use yyyy-MM-dd HHmm (e.g., 2019-10-15 1800).";

/// Parses one trimmed date/time argument.
///
/// # Errors
/// - Returns a parse error with a format hint when the shape or the calendar
///   value is invalid (e.g. month 13, hour 25).
pub fn parse_input_date_time(raw: &str) -> AppResult<NaiveDateTime> {
    if !INPUT_DATE_TIME_SHAPE_RE.is_match(raw) {
        return Err(AppError::parse(FORMAT_HINT));
    }
    NaiveDateTime::parse_from_str(raw, INPUT_DATE_TIME_FORMAT)
        .map_err(|_| AppError::parse(FORMAT_HINT))
}

#[cfg(test)]
mod tests {
    use super::parse_input_date_time;
    use chrono::NaiveDate;

    #[test]
    fn accepts_fixed_width_form() {
        let parsed = parse_input_date_time("2019-10-15 1800").unwrap();
        let expected = NaiveDate::from_ymd_opt(2019, 10, 15)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn rejects_colon_and_short_fields() {
        assert!(parse_input_date_time("2019-10-15 18:00").is_err());
        assert!(parse_input_date_time("2019-1-5 1800").is_err());
        assert!(parse_input_date_time("2019/10/15 1800").is_err());
    }

    #[test]
    fn rejects_impossible_calendar_values() {
        let err = parse_input_date_time("2019-13-40 2500").unwrap_err();
        assert!(err.message().contains("yyyy-MM-dd HHmm"));
    }
}
