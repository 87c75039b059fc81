//! # Model - Air-quality record types
//!
//! The in-memory shape of the dataset: a [`Country`] owns an ordered list of
//! [`City`] entries, and every city carries exactly one [`AirQuality`]
//! reading set.
//!
//! ```text
//! Country ("USA")
//!   ├── City ("Los Angeles", id 1) ── AirQuality (10 string fields)
//!   └── City ("New York",    id 2) ── AirQuality
//! ```
//!
//! All AQI fields are kept as the exact strings found in the backing file.
//! A value is a non-negative integer in text form or [`SENTINEL`]; a category
//! is one of the [`AqiCategory`] labels (any case) or [`SENTINEL`]. Checking
//! those rules is the job of the `validate` crate, not of these types.
use serde::{Deserialize, Serialize};

/// Marker for a value or category that is unknown or has been deleted.
pub const SENTINEL: &str = "N/A";

/// Number of AQI string fields carried by one [`AirQuality`].
pub const AQI_FIELD_COUNT: usize = 10;

/// Identity assigned to a city during a load pass.
pub type CityId = u32;

/// Case-insensitive name comparison (Unicode lowercase folding).
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// One of the five measured quantities, each reported as a (value, category) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    /// The overall AQI.
    Overall,
    /// Carbon monoxide.
    Co,
    Ozone,
    /// Nitrogen dioxide.
    No2,
    /// Fine particulate matter.
    Pm25,
}

impl Pollutant {
    /// All pollutants in file column order.
    pub const ALL: [Pollutant; 5] = [
        Pollutant::Overall,
        Pollutant::Co,
        Pollutant::Ozone,
        Pollutant::No2,
        Pollutant::Pm25,
    ];

    /// Column prefix used in the file header (e.g. `"CO AQI"`).
    pub fn label(self) -> &'static str {
        match self {
            Pollutant::Overall => "AQI",
            Pollutant::Co => "CO AQI",
            Pollutant::Ozone => "Ozone AQI",
            Pollutant::No2 => "NO2 AQI",
            Pollutant::Pm25 => "PM2.5 AQI",
        }
    }

    /// Parses a short pollutant name, ignoring case.
    ///
    /// Accepts `aqi`/`overall`, `co`, `ozone`, `no2`/`no`, `pm2.5`/`pm25`/`pm`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aqi" | "overall" => Some(Pollutant::Overall),
            "co" => Some(Pollutant::Co),
            "ozone" => Some(Pollutant::Ozone),
            "no2" | "no" => Some(Pollutant::No2),
            "pm2.5" | "pm25" | "pm" => Some(Pollutant::Pm25),
            _ => None,
        }
    }
}

/// The six AQI categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// All categories, least to most severe.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Canonical label as written in the dataset.
    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Case-insensitive lookup by label. The sentinel is not a category.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s))
    }

    /// Returns `true` if `s` is this category's label in any case.
    #[inline]
    pub fn matches(self, s: &str) -> bool {
        self.label().eq_ignore_ascii_case(s)
    }
}

/// The ten AQI strings reported for one city.
///
/// Immutable once built: an update replaces the whole value, it never patches
/// a single field. Field names on the wire follow the JSON payload format
/// (`aqiValue`, `coAqiCategory`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQuality {
    aqi_value: String,
    aqi_category: String,
    co_aqi_value: String,
    co_aqi_category: String,
    ozone_aqi_value: String,
    ozone_aqi_category: String,
    no_aqi_value: String,
    no_aqi_category: String,
    pm_aqi_value: String,
    pm_aqi_category: String,
}

impl AirQuality {
    /// Builds a reading set from the ten fields in file column order:
    /// overall, CO, ozone, NO2, PM2.5, each as value then category.
    pub fn from_fields<S: Into<String>>(fields: [S; AQI_FIELD_COUNT]) -> Self {
        let [aqi_value, aqi_category, co_aqi_value, co_aqi_category, ozone_aqi_value, ozone_aqi_category, no_aqi_value, no_aqi_category, pm_aqi_value, pm_aqi_category] =
            fields.map(Into::into);
        Self {
            aqi_value,
            aqi_category,
            co_aqi_value,
            co_aqi_category,
            ozone_aqi_value,
            ozone_aqi_category,
            no_aqi_value,
            no_aqi_category,
            pm_aqi_value,
            pm_aqi_category,
        }
    }

    /// A reading set whose every field is [`SENTINEL`] (soft-deleted row).
    pub fn deleted() -> Self {
        Self::from_fields([SENTINEL; AQI_FIELD_COUNT])
    }

    /// The value string for `pollutant`.
    pub fn value(&self, pollutant: Pollutant) -> &str {
        match pollutant {
            Pollutant::Overall => &self.aqi_value,
            Pollutant::Co => &self.co_aqi_value,
            Pollutant::Ozone => &self.ozone_aqi_value,
            Pollutant::No2 => &self.no_aqi_value,
            Pollutant::Pm25 => &self.pm_aqi_value,
        }
    }

    /// The category string for `pollutant`.
    pub fn category(&self, pollutant: Pollutant) -> &str {
        match pollutant {
            Pollutant::Overall => &self.aqi_category,
            Pollutant::Co => &self.co_aqi_category,
            Pollutant::Ozone => &self.ozone_aqi_category,
            Pollutant::No2 => &self.no_aqi_category,
            Pollutant::Pm25 => &self.pm_aqi_category,
        }
    }

    /// All ten fields in file column order.
    pub fn fields(&self) -> [&str; AQI_FIELD_COUNT] {
        [
            &self.aqi_value,
            &self.aqi_category,
            &self.co_aqi_value,
            &self.co_aqi_category,
            &self.ozone_aqi_value,
            &self.ozone_aqi_category,
            &self.no_aqi_value,
            &self.no_aqi_category,
            &self.pm_aqi_value,
            &self.pm_aqi_category,
        ]
    }

    /// Returns `true` if every field is the sentinel.
    pub fn is_deleted(&self) -> bool {
        self.fields().iter().all(|f| *f == SENTINEL)
    }
}

/// A city and its current readings.
///
/// `id` is `None` for a city inserted since the last load; it receives an
/// identity the next time the file is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    #[serde(rename = "cityId")]
    pub id: Option<CityId>,
    pub air_quality: AirQuality,
}

impl City {
    pub fn new(name: impl Into<String>, id: Option<CityId>, air_quality: AirQuality) -> Self {
        Self {
            name: name.into(),
            id,
            air_quality,
        }
    }
}

/// A country and its cities, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub cities: Vec<City>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cities: Vec::new(),
        }
    }

    /// Case-insensitive name match.
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Finds a city by exact-case name.
    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.name == name)
    }

    /// Finds a city by identity.
    pub fn city_by_id_mut(&mut self, id: CityId) -> Option<&mut City> {
        self.cities.iter_mut().find(|c| c.id == Some(id))
    }
}
