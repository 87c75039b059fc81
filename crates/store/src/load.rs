/// Load path: rebuilds the in-memory model from the table file.
///
/// Every load starts from nothing. Rows are attached in file order: the first
/// row naming a country (compared case-insensitively) creates it, later rows
/// append cities to it. Malformed rows are skipped and logged; a row whose
/// readings are not valid AQI data aborts the load.
use csvtable::{Row, RowOutcome, TableReader};
use model::{City, Country};
use tracing::{debug, warn};

use crate::{Store, StoreError};

/// Summary of one load pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Rows attached to the model.
    pub rows: usize,
    /// Malformed rows that were skipped.
    pub skipped: usize,
}

impl Store {
    /// Discards the current contents and re-reads the table file.
    ///
    /// # Errors
    ///
    /// - [`StoreError::DatabaseNotFound`] if the file is absent or empty.
    /// - [`StoreError::InvalidAqiValue`] / [`StoreError::InvalidAqiCategory`]
    ///   if any row carries invalid readings.
    /// - [`StoreError::Io`] on read failure.
    ///
    /// On error the store is left empty.
    pub fn load(&mut self) -> Result<LoadReport, StoreError> {
        self.countries.clear();
        self.ids.reset();

        match self.read_rows() {
            Ok(report) => {
                debug!(
                    path = %self.path.display(),
                    rows = report.rows,
                    skipped = report.skipped,
                    countries = self.countries.len(),
                    "loaded table"
                );
                Ok(report)
            }
            Err(e) => {
                self.countries.clear();
                self.ids.reset();
                Err(e)
            }
        }
    }

    fn read_rows(&mut self) -> Result<LoadReport, StoreError> {
        let reader = TableReader::open(&self.path)?;
        let mut report = LoadReport::default();

        for item in reader {
            let (line_no, outcome) = item?;
            match outcome {
                RowOutcome::Row(row) => {
                    self.attach(row);
                    report.rows += 1;
                }
                RowOutcome::Skip(reason) => {
                    warn!(line = line_no, %reason, "skipping malformed row");
                    report.skipped += 1;
                }
                RowOutcome::Fatal(reason) => {
                    warn!(line = line_no, %reason, "invalid readings, aborting load");
                    return Err(reason.into());
                }
            }
        }

        Ok(report)
    }

    fn attach(&mut self, row: Row) {
        let city = City::new(row.city, Some(self.ids.next_id()), row.air_quality);
        match self.countries.iter_mut().find(|c| c.is_named(&row.country)) {
            Some(country) => country.cities.push(city),
            None => {
                let mut country = Country::new(row.country);
                country.cities.push(city);
                self.countries.push(country);
            }
        }
    }
}
