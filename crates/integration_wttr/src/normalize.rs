//! Response normalization
//!
//! Turns a raw [`WttrResponse`] into the canonical [`WeatherReport`]. The
//! first current-condition record is authoritative; numeric provider strings
//! follow a lenient parse-or-zero policy rather than failing the query.

use chrono::Utc;
use domain::WeatherReport;

use crate::{client::WttrError, models::WttrResponse};

/// Normalize a provider payload into a canonical report
///
/// `fallback_location` is the caller-supplied label (original city string, or
/// `"<lat>, <lon>"` for coordinate queries) used when the provider reports no
/// nearest area.
///
/// # Errors
///
/// `WttrError::EmptyResponse` when the current-condition list is empty; a
/// record is never fabricated.
pub fn normalize(resp: &WttrResponse, fallback_location: &str) -> Result<WeatherReport, WttrError> {
    let current = resp
        .current_condition
        .first()
        .ok_or(WttrError::EmptyResponse)?;

    let location = resp
        .nearest_area
        .first()
        .and_then(|area| area.areaname.first())
        .map_or(fallback_location, |name| name.value.as_str())
        .to_owned();

    let description = current
        .weatherdesc
        .first()
        .map_or("Unknown", |desc| desc.value.as_str())
        .to_owned();

    Ok(WeatherReport {
        location,
        temperature: parse_or_zero(&current.temp_c),
        description,
        humidity: parse_or_zero(&current.humidity),
        wind_speed: parse_or_zero(&current.windspeedkmph),
        timestamp: Utc::now(),
    })
}

/// Lenient numeric parse: unparsable or empty provider strings become `0.0`
fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentCondition, Labelled, NearestArea};

    fn labelled(value: &str) -> Labelled {
        Labelled {
            value: value.to_string(),
        }
    }

    fn condition(temp: &str, humidity: &str, wind: &str, desc: &[&str]) -> CurrentCondition {
        CurrentCondition {
            temp_c: temp.to_string(),
            humidity: humidity.to_string(),
            windspeedkmph: wind.to_string(),
            weatherdesc: desc.iter().map(|d| labelled(d)).collect(),
        }
    }

    fn area(name: &str) -> NearestArea {
        NearestArea {
            areaname: vec![labelled(name)],
        }
    }

    #[test]
    fn empty_current_condition_is_an_error() {
        let resp = WttrResponse::default();
        assert!(matches!(
            normalize(&resp, "paris"),
            Err(WttrError::EmptyResponse)
        ));
    }

    #[test]
    fn first_condition_entry_wins() {
        let resp = WttrResponse {
            current_condition: vec![
                condition("18", "60", "11", &["Partly cloudy"]),
                condition("99", "99", "99", &["Wrong entry"]),
            ],
            nearest_area: vec![],
        };

        let report = normalize(&resp, "paris").expect("report");
        assert!((report.temperature - 18.0).abs() < f64::EPSILON);
        assert_eq!(report.description, "Partly cloudy");
    }

    #[test]
    fn nearest_area_overrides_query_spelling() {
        let resp = WttrResponse {
            current_condition: vec![condition("18", "60", "11", &["Sunny"])],
            nearest_area: vec![area("Paris"), area("Boulogne-Billancourt")],
        };

        let report = normalize(&resp, "pArIs").expect("report");
        assert_eq!(report.location, "Paris");
    }

    #[test]
    fn missing_area_falls_back_to_caller_string() {
        let resp = WttrResponse {
            current_condition: vec![condition("18", "60", "11", &["Sunny"])],
            nearest_area: vec![],
        };

        let report = normalize(&resp, "paris").expect("report");
        assert_eq!(report.location, "paris");
    }

    #[test]
    fn coordinate_fallback_string_is_used_verbatim() {
        let resp = WttrResponse {
            current_condition: vec![condition("18", "60", "11", &["Sunny"])],
            nearest_area: vec![],
        };

        let report = normalize(&resp, "48.85, 2.35").expect("report");
        assert_eq!(report.location, "48.85, 2.35");
    }

    #[test]
    fn missing_description_is_unknown() {
        let resp = WttrResponse {
            current_condition: vec![condition("18", "60", "11", &[])],
            nearest_area: vec![],
        };

        let report = normalize(&resp, "paris").expect("report");
        assert_eq!(report.description, "Unknown");
    }

    #[test]
    fn non_numeric_fields_default_to_zero() {
        let resp = WttrResponse {
            current_condition: vec![condition("n/a", "", "breezy", &["Haze"])],
            nearest_area: vec![],
        };

        let report = normalize(&resp, "paris").expect("report");
        assert!(report.temperature.abs() < f64::EPSILON);
        assert!(report.humidity.abs() < f64::EPSILON);
        assert!(report.wind_speed.abs() < f64::EPSILON);
        assert_eq!(report.description, "Haze");
    }

    #[test]
    fn negative_and_fractional_values_parse() {
        let resp = WttrResponse {
            current_condition: vec![condition("-3.5", "81", "4.2", &["Snow"])],
            nearest_area: vec![],
        };

        let report = normalize(&resp, "tromso").expect("report");
        assert!((report.temperature - (-3.5)).abs() < f64::EPSILON);
        assert!((report.humidity - 81.0).abs() < f64::EPSILON);
        assert!((report.wind_speed - 4.2).abs() < f64::EPSILON);
    }

    #[test]
    fn timestamp_is_set_at_normalization_time() {
        let before = Utc::now();
        let resp = WttrResponse {
            current_condition: vec![condition("18", "60", "11", &["Sunny"])],
            nearest_area: vec![],
        };
        let report = normalize(&resp, "paris").expect("report");
        let after = Utc::now();

        assert!(report.timestamp >= before && report.timestamp <= after);
    }
}
