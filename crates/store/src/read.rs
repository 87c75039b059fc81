/// Lookups over the loaded model. All are linear scans in file order.
use model::{CityId, Country};

use crate::{Store, StoreError};

impl Store {
    /// Finds a country by case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCountry`] if no country matches.
    pub fn find_country(&self, name: &str) -> Result<&Country, StoreError> {
        self.countries
            .iter()
            .find(|c| c.is_named(name))
            .ok_or_else(|| StoreError::InvalidCountry(name.to_string()))
    }

    /// Returns `true` if a country with this name (any case) is loaded.
    #[must_use]
    pub fn country_exists(&self, name: &str) -> bool {
        self.countries.iter().any(|c| c.is_named(name))
    }

    /// Returns `true` if the country exists and holds a city with exactly
    /// this name.
    #[must_use]
    pub fn city_exists(&self, country: &str, city: &str) -> bool {
        self.find_country(country)
            .map(|c| c.city(city).is_some())
            .unwrap_or(false)
    }

    /// Resolves a city's identity.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidCountry`] if the country is unknown.
    /// - [`StoreError::InvalidCity`] if the country holds no city with this
    ///   exact name, or the city has not been assigned an identity yet.
    pub fn find_city_id(&self, country: &str, city: &str) -> Result<CityId, StoreError> {
        self.find_country(country)?
            .city(city)
            .and_then(|c| c.id)
            .ok_or_else(|| StoreError::InvalidCity(city.to_string()))
    }
}
