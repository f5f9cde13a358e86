pub mod gateway;
pub mod style;

use api::PhotoMarker;
use chrono::{DateTime, Local, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

// fixed to six places with a decimal comma, the way the coordinates are shown
// on the german side of the site
//
// non-finite values and negative zero are spelled the way a browser's toFixed()
// would spell them, since that is what the map layer shows for the same marker
pub fn format_coordinate(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }

    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    // -0.0 == 0.0, so this also drops the sign of negative zero
    let value = if value == 0.0 { 0.0 } else { value };

    format!("{value:.6}").replacen('.', ",", 1)
}

// latitude first, even though the marker stores longitude first
pub fn format_location(marker: &PhotoMarker) -> String {
    format!(
        "{}, {}",
        format_coordinate(marker.latitude()),
        format_coordinate(marker.longitude())
    )
}

pub fn format_upload_date(timestamp: &str) -> String {
    format_upload_date_in(timestamp, &Local)
}

// e.g. "14. März 2024, 09:05"
pub fn format_upload_date_in<Tz>(timestamp: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(timestamp, tz) {
        Some(dt) => dt
            .format_localized("%-d. %B %Y, %H:%M", Locale::de_DE)
            .to_string(),
        None => String::from(INVALID_DATE),
    }
}

// accepts the shapes the upload pipeline actually produces:
//
//  - full rfc3339 with an offset or Z
//  - a date-time without offset, which is taken as wall time in tz
//  - a bare date, which is taken as midnight utc
fn parse_timestamp<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let timestamp = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(tz));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, fmt) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    let midnight = NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;

    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::FixedOffset;

    fn marker(coordinates: [f64; 2]) -> PhotoMarker {
        PhotoMarker {
            id: String::from("m1"),
            coordinates,
            ipfs_hash: String::from("QmHash"),
            name: String::from("Brandenburger Tor"),
            timestamp: String::from("2024-03-14T09:05:00Z"),
        }
    }

    #[test]
    fn test_format_coordinate_uses_decimal_comma() {
        assert_eq!(format_coordinate(52.520008), "52,520008");
        assert_eq!(format_coordinate(-0.1278), "-0,127800");
        assert_eq!(format_coordinate(7.0), "7,000000");
    }

    #[test]
    fn test_format_coordinate_rounds_to_six_places() {
        assert_eq!(format_coordinate(13.4049546), "13,404955");
        assert_eq!(format_coordinate(13.4049544), "13,404954");
    }

    #[test]
    fn test_format_coordinate_non_finite() {
        assert_eq!(format_coordinate(f64::NAN), "NaN");
        assert_eq!(format_coordinate(f64::INFINITY), "Infinity");
        assert_eq!(format_coordinate(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_coordinate_negative_zero() {
        assert_eq!(format_coordinate(-0.0), "0,000000");
    }

    #[test]
    fn test_format_location_puts_latitude_first() {
        // stored as [longitude, latitude]
        let berlin = marker([13.404954, 52.520008]);
        assert_eq!(format_location(&berlin), "52,520008, 13,404954");
    }

    #[test]
    fn test_format_location_southern_western_hemisphere() {
        let rio = marker([-43.172897, -22.906847]);
        assert_eq!(format_location(&rio), "-22,906847, -43,172897");
    }

    #[test]
    fn test_format_upload_date_utc() {
        assert_eq!(
            format_upload_date_in("2024-03-14T09:05:00Z", &Utc),
            "14. März 2024, 09:05"
        );
    }

    #[test]
    fn test_format_upload_date_converts_offset() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            format_upload_date_in("2024-03-14T09:05:00Z", &cet),
            "14. März 2024, 10:05"
        );

        // crossing midnight moves the day too
        assert_eq!(
            format_upload_date_in("2024-12-31T23:30:00Z", &cet),
            "1. Januar 2025, 00:30"
        );
    }

    #[test]
    fn test_format_upload_date_with_source_offset() {
        assert_eq!(
            format_upload_date_in("2024-07-01T20:15:30.250+02:00", &Utc),
            "1. Juli 2024, 18:15"
        );
    }

    #[test]
    fn test_format_upload_date_without_offset_is_wall_time() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            format_upload_date_in("2024-03-14T09:05:00", &cet),
            "14. März 2024, 09:05"
        );
        assert_eq!(
            format_upload_date_in("2024-03-14T09:05", &cet),
            "14. März 2024, 09:05"
        );
    }

    #[test]
    fn test_format_upload_date_bare_date_is_utc_midnight() {
        assert_eq!(
            format_upload_date_in("2024-10-03", &Utc),
            "3. Oktober 2024, 00:00"
        );

        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(
            format_upload_date_in("2024-10-03", &pacific),
            "2. Oktober 2024, 16:00"
        );
    }

    #[test]
    fn test_format_upload_date_invalid() {
        assert_eq!(format_upload_date_in("yesterday", &Utc), INVALID_DATE);
        assert_eq!(format_upload_date_in("", &Utc), INVALID_DATE);
        assert_eq!(format_upload_date_in("2024-02-30", &Utc), INVALID_DATE);
    }
}
