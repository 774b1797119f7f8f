//! Presentation helpers for decoded navigation fields.

use std::borrow::Cow;

use chrono::NaiveTime;

use crate::constants::GPS_UTC_LEAP_SECONDS;

const SECONDS_PER_DAY: i64 = 86_400;

/// UTC time of day for a GPS time of week in milliseconds
pub fn itow2utc(itow_ms: u32) -> NaiveTime {
    let ms = i64::from(itow_ms) - GPS_UTC_LEAP_SECONDS * 1000;
    let secs = ms.div_euclid(1000).rem_euclid(SECONDS_PER_DAY);
    let nanos = ms.rem_euclid(1000) * 1_000_000;
    NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, nanos as u32).unwrap_or_default()
}

/// Constellation name for a GNSS identifier
pub fn gnss2str(gnss_id: u8) -> Cow<'static, str> {
    match gnss_id {
        0 => "GPS".into(),
        1 => "SBAS".into(),
        2 => "Galileo".into(),
        3 => "BeiDou".into(),
        4 => "IMES".into(),
        5 => "QZSS".into(),
        6 => "GLONASS".into(),
        other => other.to_string().into(),
    }
}

/// Fix type description
pub fn gpsfix2str(fix: u8) -> Cow<'static, str> {
    match fix {
        0 => "NO FIX".into(),
        1 => "DR".into(),
        2 => "2D".into(),
        3 => "3D".into(),
        4 => "GPS + DR".into(),
        5 => "TIME ONLY".into(),
        other => other.to_string().into(),
    }
}

/// Rating of a dilution of precision value
pub fn dop2str(dop: f64) -> &'static str {
    if dop == 1.0 {
        "Ideal"
    } else if dop <= 2.0 {
        "Excellent"
    } else if dop <= 5.0 {
        "Good"
    } else if dop <= 10.0 {
        "Moderate"
    } else if dop <= 20.0 {
        "Fair"
    } else {
        "Poor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itow_to_utc() {
        assert_eq!(itow2utc(387_092_000).to_string(), "11:31:14");
        assert_eq!(
            itow2utc(387_092_500),
            NaiveTime::from_hms_milli_opt(11, 31, 14, 500).unwrap()
        );
        // leap seconds wrap into the previous day
        assert_eq!(itow2utc(0), NaiveTime::from_hms_opt(23, 59, 42).unwrap());
    }

    #[test]
    fn dop_ratings() {
        let ratings: Vec<_> = [1.0, 2.0, 5.0, 10.0, 20.0, 30.0]
            .into_iter()
            .map(dop2str)
            .collect();
        assert_eq!(ratings, ["Ideal", "Excellent", "Good", "Moderate", "Fair", "Poor"]);
        assert_eq!(dop2str(0.9), "Excellent");
    }
}
