use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts tried in order.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Date-only layouts tried in order. These resolve to midnight.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses an order date leniently.
///
/// Returns `None` for empty or unrecognised input instead of failing, so a bad
/// date never aborts a transformation. Offsets in RFC 3339 input are converted to UTC.
pub fn parse_order_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn parses_supported_layouts() {
        assert_eq!(parse_order_date("2023-09-01"), Some(ymd_hms(2023, 9, 1, 0, 0, 0)));
        assert_eq!(parse_order_date("2023/09/01"), Some(ymd_hms(2023, 9, 1, 0, 0, 0)));
        assert_eq!(parse_order_date("09/01/2023"), Some(ymd_hms(2023, 9, 1, 0, 0, 0)));
        assert_eq!(
            parse_order_date("2025-09-02 12:00"),
            Some(ymd_hms(2025, 9, 2, 12, 0, 0))
        );
        assert_eq!(
            parse_order_date(" 2025-09-02 12:30:15 "),
            Some(ymd_hms(2025, 9, 2, 12, 30, 15))
        );
        assert_eq!(
            parse_order_date("2025-09-02T12:30:15"),
            Some(ymd_hms(2025, 9, 2, 12, 30, 15))
        );
    }

    #[test]
    fn rfc3339_is_normalised_to_utc() {
        assert_eq!(
            parse_order_date("2025-09-02T12:00:00+02:00"),
            Some(ymd_hms(2025, 9, 2, 10, 0, 0))
        );
    }

    #[test]
    fn garbage_becomes_none() {
        assert_eq!(parse_order_date(""), None);
        assert_eq!(parse_order_date("not a date"), None);
        assert_eq!(parse_order_date("2023-13-45"), None);
    }
}
