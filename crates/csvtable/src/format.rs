//! Header constant and the row codec.
//!
//! A row is exactly [`COLUMN_COUNT`] fields:
//!
//! ```text
//! [country][city][aqi v][aqi cat][co v][co cat][ozone v][ozone cat][no2 v][no2 cat][pm v][pm cat]
//! ```
//!
//! Parsing splits on the first eleven delimiters only. Whatever follows is the
//! last category field; delimiters inside it are dropped and it is trimmed, so
//! rows written with a trailing comma still parse.

use model::{AirQuality, Pollutant, AQI_FIELD_COUNT};
use validate::{validate_integer, validate_name, ValidationError};

/// The fixed first line of every table file.
pub const HEADER: &str = "Country,City,AQI Value,AQI Category,CO AQI Value,CO AQI Category,\
Ozone AQI Value,Ozone AQI Category,NO2 AQI Value,NO2 AQI Category,PM2.5 AQI Value,PM2.5 AQI Category";

/// Field separator.
pub const DELIMITER: char = ',';

/// Fields per row: country, city, then ten AQI fields.
pub const COLUMN_COUNT: usize = 2 + AQI_FIELD_COUNT;

/// A parsed content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub country: String,
    pub city: String,
    pub air_quality: AirQuality,
}

/// The header followed by a newline, as written at the top of the file.
pub fn header_line() -> String {
    format!("{HEADER}\n")
}

/// Serializes one row: twelve fields joined by [`DELIMITER`], newline-terminated.
pub fn serialize_row(country: &str, city: &str, aq: &AirQuality) -> String {
    let mut out = String::with_capacity(64);
    out.push_str(country);
    out.push(DELIMITER);
    out.push_str(city);
    for field in aq.fields() {
        out.push(DELIMITER);
        out.push_str(field);
    }
    out.push('\n');
    out
}

/// Parses one content line into a [`Row`].
///
/// Only structural checks run here: names must pass [`validate_name`] and the
/// five value fields must pass [`validate_integer`]. Whether the readings are
/// acceptable AQI data is a separate decision (see `classify_line`).
pub fn parse_line(line: &str) -> Result<Row, ValidationError> {
    let parts: Vec<&str> = line.splitn(COLUMN_COUNT, DELIMITER).collect();
    if parts.len() < COLUMN_COUNT {
        return Err(ValidationError::InvalidRecord(line.to_string()));
    }

    let country = validate_name(parts[0])?;
    let city = validate_name(parts[1])?;

    let last: String = parts[COLUMN_COUNT - 1]
        .chars()
        .filter(|&c| c != DELIMITER)
        .collect();

    let mut fields: [String; AQI_FIELD_COUNT] = Default::default();
    for (i, slot) in fields.iter_mut().enumerate() {
        *slot = if i == AQI_FIELD_COUNT - 1 {
            last.trim().to_string()
        } else {
            parts[i + 2].to_string()
        };
    }

    let air_quality = AirQuality::from_fields(fields);
    for pollutant in Pollutant::ALL {
        validate_integer(air_quality.value(pollutant))?;
    }

    Ok(Row {
        country: country.to_string(),
        city: city.to_string(),
        air_quality,
    })
}
