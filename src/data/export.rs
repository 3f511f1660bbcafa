use std::path::{Path, PathBuf};

use serde::Serialize;

use super::model::{GlobalSalary, UsSalary, GLOBAL_COLUMNS, US_COLUMNS};
use crate::error::ExportError;

pub const US_EXPORT_FILE: &str = "filtered_us_salaries.csv";
pub const GLOBAL_EXPORT_FILE: &str = "filtered_global_salaries.csv";

/// A record type that can be written as one CSV row.
pub trait ExportRecord: Serialize {
    /// Header row, in the order the fields serialize.
    const COLUMNS: &'static [&'static str];
}

impl ExportRecord for UsSalary {
    const COLUMNS: &'static [&'static str] = &US_COLUMNS;
}

impl ExportRecord for GlobalSalary {
    const COLUMNS: &'static [&'static str] = &GLOBAL_COLUMNS;
}

/// Write the filtered US rows to `dir/filtered_us_salaries.csv`.
pub fn export_us(records: &[UsSalary], dir: &Path) -> Result<PathBuf, ExportError> {
    write_records(records, &dir.join(US_EXPORT_FILE))
}

/// Write the reshaped Global rows to `dir/filtered_global_salaries.csv`.
///
/// The file holds the long USD form shown in the Global table, one row per
/// job title and country. The wide local-currency sheet is not exported.
pub fn export_global(records: &[GlobalSalary], dir: &Path) -> Result<PathBuf, ExportError> {
    write_records(records, &dir.join(GLOBAL_EXPORT_FILE))
}

/// Write `records` with a header row and no index column.
///
/// The header is written even when there are no records.
pub fn write_records<T: ExportRecord>(records: &[T], path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::Directory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Headers are written by hand so an empty result still gets one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(T::COLUMNS).map_err(csv_err)?;
    for record in records {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ExportError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Exported {} rows to {}", records.len(), path.display());
    Ok(path.to_path_buf())
}
