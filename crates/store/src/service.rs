//! Request-scoped operations over one table file.
//!
//! Each call reloads the file before acting. Reads take the shared lock and
//! query a private snapshot; writes take the exclusive lock for the whole
//! load, mutate, persist, reload sequence, so two writers never interleave.
use std::path::{Path, PathBuf};

use csvtable::DELIMITER;
use model::{names_match, AirQuality, AqiCategory, City, Country, Pollutant};
use parking_lot::RwLock;
use tracing::info;
use validate::{is_sentinel, validate_air_quality, validate_aqi_value, validate_name};

use crate::{Store, StoreError, StoreStats};

/// Shared entry point for every request against one table file.
pub struct AirQualityService {
    store: RwLock<Store>,
}

impl AirQualityService {
    /// Creates a service for the table at `path`. Nothing is read yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::from_store(Store::new(path))
    }

    pub fn from_store(store: Store) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.store.read().path().to_path_buf()
    }

    /// Loads a private copy of the table while holding the shared lock.
    fn snapshot(&self) -> Result<Store, StoreError> {
        let guard = self.store.read();
        let mut snap = Store::new(guard.path());
        snap.load()?;
        Ok(snap)
    }

    // -------------------- reads --------------------

    /// Readings for one city. Both names match case-insensitively.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoCountryFound`] if the country is unknown,
    /// [`StoreError::NoCityFound`] if it holds no such city.
    pub fn air_quality(&self, country: &str, city: &str) -> Result<AirQuality, StoreError> {
        let snap = self.snapshot()?;
        let target = snap
            .countries()
            .iter()
            .filter(|c| c.is_named(country))
            .flat_map(|c| &c.cities)
            .filter(|c| names_match(&c.name, city))
            .last();

        match target {
            Some(c) => Ok(c.air_quality.clone()),
            None if snap.country_exists(country) => Err(StoreError::NoCityFound(format!(
                "{city} not found in {country}"
            ))),
            None => Err(StoreError::NoCountryFound(country.to_string())),
        }
    }

    /// All country names in file order.
    pub fn country_names(&self) -> Result<Vec<String>, StoreError> {
        let snap = self.snapshot()?;
        let names: Vec<String> = snap.countries().iter().map(|c| c.name.clone()).collect();
        if names.is_empty() {
            return Err(StoreError::NoCountryFound("database holds no countries".into()));
        }
        Ok(names)
    }

    /// All city names in file order, across countries.
    pub fn city_names(&self) -> Result<Vec<String>, StoreError> {
        let snap = self.snapshot()?;
        let names: Vec<String> = snap
            .countries()
            .iter()
            .flat_map(|c| &c.cities)
            .map(|c| c.name.clone())
            .collect();
        if names.is_empty() {
            return Err(StoreError::NoCityFound("database holds no cities".into()));
        }
        Ok(names)
    }

    /// The whole model.
    pub fn all_records(&self) -> Result<Vec<Country>, StoreError> {
        let snap = self.snapshot()?;
        if snap.is_empty() {
            return Err(StoreError::NoCountryFound("database holds no countries".into()));
        }
        Ok(snap.countries)
    }

    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        Ok(self.snapshot()?.stats())
    }

    // -------------------- queries --------------------

    /// Cities whose `pollutant` category is any of `categories`, in file order.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoCityFound`] if nothing matches.
    pub fn cities_with_category(
        &self,
        pollutant: Pollutant,
        categories: &[AqiCategory],
    ) -> Result<Vec<City>, StoreError> {
        let snap = self.snapshot()?;
        let found: Vec<City> = all_cities(&snap)
            .filter(|c| {
                let cat = c.air_quality.category(pollutant);
                categories.iter().any(|want| want.matches(cat))
            })
            .cloned()
            .collect();
        non_empty(found, || {
            let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();
            format!("no {} in {}", pollutant.label(), labels.join(" | "))
        })
    }

    /// Cities with a CO category of Good.
    pub fn co_healthy_cities(&self) -> Result<Vec<City>, StoreError> {
        self.cities_with_category(Pollutant::Co, &[AqiCategory::Good])
    }

    /// Cities with a CO category of Unhealthy or Unhealthy for Sensitive Groups.
    pub fn co_unhealthy_cities(&self) -> Result<Vec<City>, StoreError> {
        self.cities_with_category(
            Pollutant::Co,
            &[AqiCategory::Unhealthy, AqiCategory::UnhealthyForSensitiveGroups],
        )
    }

    /// Cities whose `pollutant` value lies in `start..=end`. Sentinel values
    /// never match.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidAqiValue`] if either bound is not a non-negative
    /// integer, [`StoreError::NoCityFound`] if nothing matches.
    pub fn cities_in_value_range(
        &self,
        pollutant: Pollutant,
        start: &str,
        end: &str,
    ) -> Result<Vec<City>, StoreError> {
        let lo = parse_bound(start)?;
        let hi = parse_bound(end)?;

        let snap = self.snapshot()?;
        let found: Vec<City> = all_cities(&snap)
            .filter(|c| {
                let v = c.air_quality.value(pollutant);
                !is_sentinel(v) && v.parse::<u32>().is_ok_and(|v| lo <= v && v <= hi)
            })
            .cloned()
            .collect();
        non_empty(found, || format!("no {} between {lo} and {hi}", pollutant.label()))
    }

    // -------------------- writes --------------------

    /// Adds a city by appending one row, creating the country if needed.
    ///
    /// Returns the city as it reads back after reload.
    ///
    /// # Errors
    ///
    /// - invalid readings, before anything is touched;
    /// - [`StoreError::InvalidRecord`] for a name the file cannot hold;
    /// - [`StoreError::InvalidCity`] if the country already has this city.
    pub fn create(&self, country: &str, city: &str, aq: AirQuality) -> Result<City, StoreError> {
        validate_air_quality(&aq)?;
        check_name(country)?;
        check_name(city)?;

        let mut store = self.store.write();
        store.load()?;
        if store.city_exists(country, city) {
            return Err(StoreError::InvalidCity(format!("{city} already exists")));
        }

        store.append(country, city, &aq)?;
        store.insert_city(country, city, aq);
        store.load()?;

        info!(country, city, "created record");
        reloaded_city(&store, country, city)
    }

    /// Replaces a city's readings and rewrites the file.
    ///
    /// # Errors
    ///
    /// Invalid readings, [`StoreError::InvalidCountry`] or
    /// [`StoreError::InvalidCity`]. The file is untouched on error.
    pub fn update(&self, country: &str, city: &str, aq: AirQuality) -> Result<City, StoreError> {
        validate_air_quality(&aq)?;

        let mut store = self.store.write();
        store.load()?;
        let id = store.find_city_id(country, city)?;
        store.update_city(country, id, aq);
        store.persist()?;
        store.load()?;

        info!(country, city, id, "updated record");
        reloaded_city(&store, country, city)
    }

    /// Soft-deletes a city and rewrites the file. The row stays with all
    /// readings set to the sentinel.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidCountry`] or [`StoreError::InvalidCity`]. The file
    /// is untouched on error.
    pub fn delete(&self, country: &str, city: &str) -> Result<City, StoreError> {
        let mut store = self.store.write();
        store.load()?;
        let id = store.find_city_id(country, city)?;
        store.soft_delete_city(country, city, id);
        store.persist()?;
        store.load()?;

        info!(country, city, id, "deleted record");
        reloaded_city(&store, country, city)
    }
}

fn all_cities(store: &Store) -> impl Iterator<Item = &City> {
    store.countries().iter().flat_map(|c| &c.cities)
}

fn non_empty<F>(found: Vec<City>, describe: F) -> Result<Vec<City>, StoreError>
where
    F: FnOnce() -> String,
{
    if found.is_empty() {
        Err(StoreError::NoCityFound(describe()))
    } else {
        Ok(found)
    }
}

fn parse_bound(s: &str) -> Result<u32, StoreError> {
    validate_aqi_value(s)?;
    s.parse::<u32>()
        .map_err(|_| StoreError::InvalidAqiValue(format!("AQI value invalid: {s:?}")))
}

/// Names go straight into a delimited row, so they must parse back.
fn check_name(name: &str) -> Result<(), StoreError> {
    validate_name(name)?;
    if name.contains(DELIMITER) || name.contains(['\n', '\r']) {
        return Err(StoreError::InvalidRecord(format!(
            "name must not contain a delimiter or line break: {name:?}"
        )));
    }
    Ok(())
}

fn reloaded_city(store: &Store, country: &str, city: &str) -> Result<City, StoreError> {
    store
        .find_country(country)?
        .city(city)
        .cloned()
        .ok_or_else(|| StoreError::InvalidCity(city.to_string()))
}
