use csvtable::HEADER;
use model::AirQuality;
use std::fs;
use std::path::{Path, PathBuf};

pub const LA: &str = "USA,LA,50,Good,10,Good,20,Good,5,Good,15,Good";
pub const NYC: &str = "USA,NYC,60,Moderate,30,Unhealthy,40,Good,8,Good,22,Moderate";
pub const PARIS: &str = "France,Paris,70,Moderate,12,unhealthy for sensitive groups,25,Good,9,Good,30,Moderate";
pub const DELHI: &str = "India,Delhi,300,Hazardous,N/A,N/A,90,Unhealthy,40,Good,280,Very Unhealthy";

/// Writes a table file with the standard header and the given rows.
pub fn write_table(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("air.csv");
    let mut contents = format!("{HEADER}\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(&path, contents).unwrap();
    path
}

pub fn readings(overall: &str, category: &str) -> AirQuality {
    AirQuality::from_fields([
        overall, category, "1", "Good", "2", "Good", "3", "Good", "4", "Good",
    ])
}

pub fn data_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}
