use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use model::{AirQuality, Country};
use tracing::{debug, warn};

use crate::format::{header_line, serialize_row};
use crate::TableError;

/// Stateless table writer.
///
/// All methods are associated functions; the writer holds no state.
pub struct TableWriter {}

impl TableWriter {
    /// Appends one row to an existing table file.
    ///
    /// The header and existing rows are left untouched. If the file does not
    /// end in a newline one is written first so the new row starts on its own
    /// line.
    pub fn append_row<P: AsRef<Path>>(
        path: P,
        country: &str,
        city: &str,
        aq: &AirQuality,
    ) -> Result<(), TableError> {
        let path = path.as_ref();
        let mut f = OpenOptions::new()
            .read(true)
            .append(true)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TableError::NotFound(path.to_path_buf()),
                _ => TableError::Io(e),
            })?;

        let mut line = String::new();
        if !ends_with_newline(&mut f)? {
            line.push('\n');
        }
        line.push_str(&serialize_row(country, city, aq));

        f.write_all(line.as_bytes())?;
        f.flush()?;
        f.sync_all()?;

        debug!(path = %path.display(), country, city, "appended row");
        Ok(())
    }

    /// Rewrites the whole table: header, then one row per city per country
    /// in the given order.
    ///
    /// Content goes to a sibling `.tmp` file which is fsynced and renamed over
    /// the target. If the rename fails the target is truncated and written
    /// directly.
    pub fn rewrite_all<P: AsRef<Path>>(path: P, countries: &[Country]) -> Result<(), TableError> {
        let path = path.as_ref();
        let contents = render(countries);
        let tmp_path = tmp_path_for(path);

        if let Err(e) = write_synced(&tmp_path, &contents) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&tmp_path, path) {
            warn!(
                tmp = %tmp_path.display(),
                path = %path.display(),
                error = %e,
                "rename failed, writing table in place"
            );
            let result = write_synced(path, &contents);
            let _ = fs::remove_file(&tmp_path);
            result?;
        }

        debug!(
            path = %path.display(),
            countries = countries.len(),
            bytes = contents.len(),
            "rewrote table"
        );
        Ok(())
    }
}

/// Header plus every row, as a single string.
fn render(countries: &[Country]) -> String {
    let mut out = header_line();
    for country in countries {
        for city in &country.cities {
            out.push_str(&serialize_row(&country.name, &city.name, &city.air_quality));
        }
    }
    out
}

/// Truncates `path`, writes `contents` and fsyncs.
fn write_synced(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    f.write_all(contents.as_bytes())?;
    f.flush()?;
    f.sync_all()
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn ends_with_newline(f: &mut File) -> Result<bool, TableError> {
    let len = f.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    f.seek(SeekFrom::End(-1))?;
    f.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
