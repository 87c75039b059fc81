//! # Store - Air-quality record store
//!
//! Loads the flat table file into a country → city hierarchy, answers lookups
//! over it, and writes mutations back to disk.
//!
//! ## Architecture
//!
//! ```text
//! Caller (cli / service)
//!   |
//!   v
//! ┌───────────────────────────────────────────────┐
//! │            AirQualityService (RwLock)         │
//! │                                               │
//! │ read   → load() → query snapshot              │
//! │                                               │
//! │ write  → load() → validate → mutate           │
//! │              |                                │
//! │              v                                │
//! │     append()  (insert)                        │
//! │     persist() (update / delete, full rewrite) │
//! │              |                                │
//! │              v                                │
//! │           load()  (model == file again)       │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module      | Purpose                                                 |
//! |-------------|---------------------------------------------------------|
//! | `lib.rs`    | `Store` struct, constructor, accessors, `Debug`, stats  |
//! | `load`      | `load()` and [`LoadReport`]                             |
//! | `read`      | country/city lookups                                    |
//! | `write`     | insert, update, soft delete, append, persist            |
//! | `ident`     | per-load city identity counter                          |
//! | `service`   | request-scoped operations behind a lock                 |
//! | `auth`      | static credential check                                 |
//!
//! The store is a cache with a lifetime of one request: every operation in
//! [`AirQualityService`] reloads before acting, and every mutation reloads
//! after writing, so the model always equals what the file says.
mod auth;
mod error;
mod ident;
mod load;
mod read;
mod service;
mod write;

use std::fmt;
use std::path::{Path, PathBuf};

use model::Country;
use serde::Serialize;

pub use auth::Credentials;
pub use error::StoreError;
pub use ident::IdAllocator;
pub use load::LoadReport;
pub use service::AirQualityService;

/// Counts over the loaded model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StoreStats {
    pub countries: usize,
    pub cities: usize,
    /// Cities whose readings are all sentinels.
    pub deleted: usize,
}

/// The in-memory model of one table file.
///
/// Construct with [`Store::new`] (empty) or [`Store::open`] (loaded).
/// Contents are only meaningful right after a successful [`Store::load`].
pub struct Store {
    pub(crate) path: PathBuf,
    pub(crate) countries: Vec<Country>,
    pub(crate) ids: IdAllocator,
}

impl Store {
    /// Creates an empty store bound to `path`. Nothing is read.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            countries: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Creates a store and loads it.
    ///
    /// # Errors
    ///
    /// Same as [`Store::load`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Path of the backing table file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loaded countries in file order.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Total number of cities across all countries.
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|c| c.cities.len()).sum()
    }

    #[must_use]
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            countries: self.countries.len(),
            cities: self.city_count(),
            deleted: self
                .countries
                .iter()
                .flat_map(|c| &c.cities)
                .filter(|c| c.air_quality.is_deleted())
                .count(),
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("path", &self.path)
            .field("countries", &self.countries.len())
            .field("cities", &self.city_count())
            .field("ids_issued", &self.ids.issued())
            .finish()
    }
}

#[cfg(test)]
mod tests;
