use super::{good_readings, LA_ROW};
use crate::*;
use model::{Pollutant, SENTINEL};
use validate::ValidationError;

// -------------------- Header --------------------

#[test]
fn header_has_twelve_columns() {
    assert_eq!(HEADER.split(DELIMITER).count(), COLUMN_COUNT);
    assert!(HEADER.starts_with("Country,City,AQI Value,AQI Category,CO AQI Value"));
    assert!(HEADER.ends_with("PM2.5 AQI Value,PM2.5 AQI Category"));
    assert_eq!(header_line(), format!("{HEADER}\n"));
}

// -------------------- serialize_row --------------------

#[test]
fn serialize_row_has_no_trailing_delimiter() {
    let line = serialize_row("USA", "LA", &good_readings());
    assert_eq!(line, format!("{LA_ROW}\n"));
    assert!(!line.trim_end().ends_with(DELIMITER));
}

#[test]
fn serialize_then_parse_preserves_fields() {
    let aq = good_readings();
    let line = serialize_row("USA", "Los Angeles", &aq);
    let row = parse_line(line.trim_end()).unwrap();
    assert_eq!(row.country, "USA");
    assert_eq!(row.city, "Los Angeles");
    assert_eq!(row.air_quality, aq);
}

// -------------------- parse_line --------------------

#[test]
fn parse_line_reads_all_fields() {
    let row = parse_line(LA_ROW).unwrap();
    assert_eq!(row.country, "USA");
    assert_eq!(row.city, "LA");
    assert_eq!(row.air_quality.value(Pollutant::Overall), "50");
    assert_eq!(row.air_quality.category(Pollutant::Pm25), "Good");
}

#[test]
fn parse_line_tolerates_trailing_delimiter_and_whitespace() {
    let row = parse_line("USA,LA,50,Good,10,Good,20,Good,5,Good,15,Good,\r").unwrap();
    assert_eq!(row.air_quality.category(Pollutant::Pm25), "Good");

    let row = parse_line("USA,LA,50,Good,10,Good,20,Good,5,Good,15, Very Unhealthy ").unwrap();
    assert_eq!(row.air_quality.category(Pollutant::Pm25), "Very Unhealthy");
}

#[test]
fn parse_line_strips_extra_delimiters_from_last_field() {
    let row = parse_line("USA,LA,50,Good,10,Good,20,Good,5,Good,15,Go,od").unwrap();
    assert_eq!(row.air_quality.category(Pollutant::Pm25), "Good");
}

#[test]
fn parse_line_accepts_sentinel_values() {
    let row = parse_line("USA,LA,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A").unwrap();
    assert!(row.air_quality.is_deleted());
    assert_eq!(row.air_quality.value(Pollutant::Co), SENTINEL);
}

#[test]
fn parse_line_rejects_short_rows() {
    let err = parse_line("USA,LA,50,Good").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidRecord(_)));
}

#[test]
fn parse_line_rejects_non_numeric_value() {
    let err = parse_line("USA,LA,fifty,Good,10,Good,20,Good,5,Good,15,Good").unwrap_err();
    assert_eq!(err, ValidationError::InvalidRecord("fifty".to_string()));

    let err = parse_line("USA,LA,50,Good,10,Good,20,Good,-1,Good,15,Good").unwrap_err();
    assert_eq!(err, ValidationError::InvalidRecord("-1".to_string()));
}

#[test]
fn parse_line_rejects_malformed_names() {
    assert!(parse_line(",LA,50,Good,10,Good,20,Good,5,Good,15,Good").is_err());
    assert!(parse_line("USA,x ,50,Good,10,Good,20,Good,5,Good,15,Good").is_err());
}
