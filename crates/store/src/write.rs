/// Write path: in-memory mutations plus the two persistence routes.
///
/// None of the mutations here re-check AQI readings; callers validate first.
/// Inserts reach disk through [`Store::append`], everything else through
/// [`Store::persist`] which rewrites the whole table.
use csvtable::TableWriter;
use model::{AirQuality, City, CityId, Country};
use tracing::{debug, info};

use crate::{Store, StoreError};

impl Store {
    /// Adds a city, creating the country if it is not loaded yet.
    ///
    /// The caller is responsible for rejecting duplicates. The new city has no
    /// identity until the next load.
    pub fn insert_city(&mut self, country: &str, city: &str, aq: AirQuality) {
        let entry = City::new(city, None, aq);
        match self.countries.iter_mut().find(|c| c.is_named(country)) {
            Some(c) => c.cities.push(entry),
            None => {
                let mut c = Country::new(country);
                c.cities.push(entry);
                self.countries.push(c);
            }
        }
        info!(country, city, "inserted city");
    }

    /// Replaces the readings of the city with identity `id`.
    ///
    /// Does nothing if the country or the identity is not found. Returns
    /// whether a city was updated.
    pub fn update_city(&mut self, country: &str, id: CityId, aq: AirQuality) -> bool {
        let Some(city) = self.city_mut(country, id) else {
            debug!(country, id, "update target not found");
            return false;
        };
        city.air_quality = aq;
        info!(country, id, "updated city");
        true
    }

    /// Replaces a city's readings with sentinels. The row itself stays.
    ///
    /// The city is matched by identity; `city` is used for logging only.
    /// Returns whether a city was deleted.
    pub fn soft_delete_city(&mut self, country: &str, city: &str, id: CityId) -> bool {
        let Some(entry) = self.city_mut(country, id) else {
            debug!(country, city, id, "delete target not found");
            return false;
        };
        entry.air_quality = AirQuality::deleted();
        info!(country, city, id, "soft-deleted city");
        true
    }

    /// Appends a single row for a newly inserted city.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DatabaseNotFound`] if the file is gone and
    /// [`StoreError::Io`] on write failure.
    pub fn append(&self, country: &str, city: &str, aq: &AirQuality) -> Result<(), StoreError> {
        TableWriter::append_row(&self.path, country, city, aq)?;
        Ok(())
    }

    /// Rewrites the table file from the current model.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if any write fails.
    pub fn persist(&self) -> Result<(), StoreError> {
        TableWriter::rewrite_all(&self.path, &self.countries)?;
        Ok(())
    }

    fn city_mut(&mut self, country: &str, id: CityId) -> Option<&mut City> {
        self.countries
            .iter_mut()
            .find(|c| c.is_named(country))?
            .city_by_id_mut(id)
    }
}
