use super::helpers::*;
use crate::*;
use anyhow::Result;
use model::{AirQuality, Pollutant, SENTINEL};
use std::fs;
use tempfile::tempdir;

// -------------------- Round trip --------------------

#[test]
fn persist_after_load_reproduces_file() -> Result<()> {
    let dir = tempdir()?;
    let path = write_table(dir.path(), &[LA, NYC, PARIS, DELHI]);
    let before = fs::read_to_string(&path)?;

    let store = Store::open(&path)?;
    store.persist()?;

    assert_eq!(fs::read_to_string(&path)?, before);
    Ok(())
}

#[test]
fn persist_drops_trailing_delimiters() -> Result<()> {
    let dir = tempdir()?;
    let path = write_table(dir.path(), &[&format!("{LA},")]);
    Store::open(&path)?.persist()?;
    assert_eq!(data_lines(&path), [LA]);
    Ok(())
}

// -------------------- Insert --------------------

#[test]
fn insert_into_existing_country_then_append() -> Result<()> {
    let dir = tempdir()?;
    let path = write_table(dir.path(), &[LA]);
    let mut store = Store::open(&path)?;

    let aq = readings("70", "Moderate");
    store.append("USA", "NYC", &aq)?;
    store.insert_city("USA", "NYC", aq);
    assert_eq!(store.find_country("USA")?.cities[1].id, None);

    store.load()?;
    let usa = store.find_country("USA")?;
    let ids: Vec<_> = usa.cities.iter().map(|c| c.id).collect();
    assert_eq!(ids, [Some(1), Some(2)]);
    assert_eq!(usa.cities[1].name, "NYC");
    assert_eq!(data_lines(&path).len(), 2);
    Ok(())
}

#[test]
fn insert_creates_new_country() -> Result<()> {
    let dir = tempdir()?;
    let path = write_table(dir.path(), &[LA]);
    let mut store = Store::open(&path)?;
    store.insert_city("Japan", "Tokyo", readings("40", "Good"));
    assert_eq!(store.countries().len(), 2);
    assert_eq!(store.find_country("japan")?.cities[0].name, "Tokyo");
    Ok(())
}

// -------------------- Update --------------------

#[test]
fn update_replaces_readings() -> Result<()> {
    let dir = tempdir()?;
    let path = write_table(dir.path(), &[LA, NYC]);
    let mut store = Store::open(&path)?;

    let id = store.find_city_id("USA", "NYC")?;
    assert!(store.update_city("usa", id, readings("99", "Moderate")));
    store.persist()?;
    store.load()?;

    let nyc = store.find_country("USA")?.city("NYC").unwrap();
    assert_eq!(nyc.air_quality.value(Pollutant::Overall), "99");
    assert_eq!(data_lines(&path)[0], LA);
    Ok(())
}

#[test]
fn update_unknown_target_is_noop() -> Result<()> {
    let dir = tempdir()?;
    let path = write_table(dir.path(), &[LA]);
    let mut store = Store::open(&path)?;
    assert!(!store.update_city("USA", 42, readings("1", "Good")));
    assert!(!store.update_city("Spain", 1, readings("1", "Good")));
    assert_eq!(
        store.find_country("USA")?.cities[0].air_quality.value(Pollutant::Overall),
        "50"
    );
    Ok(())
}

// -------------------- Soft delete --------------------

#[test]
fn soft_delete_keeps_row_count() -> Result<()> {
    let dir = tempdir()?;
    let path = write_table(dir.path(), &[LA, NYC]);
    let mut store = Store::open(&path)?;
    let before = store.city_count();

    assert!(store.soft_delete_city("USA", "LA", 1));
    store.persist()?;
    store.load()?;

    assert_eq!(store.city_count(), before);
    let la = store.find_country("USA")?.city("LA").unwrap();
    assert!(la.air_quality.fields().iter().all(|f| *f == SENTINEL));
    assert_eq!(la.air_quality, AirQuality::deleted());

    let lines = data_lines(&path);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "USA,LA,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A");
    assert_eq!(lines[1], NYC);
    Ok(())
}
