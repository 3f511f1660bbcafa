//! Error types for loading the salary workbook and exporting filtered data.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a workbook into salary datasets.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The workbook could not be opened or parsed.
    #[error("cannot read salary workbook '{path}': {source}")]
    MissingDataFile {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook has fewer sheets than expected.
    #[error("workbook has no sheet at index {index} ({name} data)")]
    MissingSheet { index: usize, name: &'static str },

    /// A sheet has no header row.
    #[error("{sheet} sheet is empty")]
    EmptySheet { sheet: &'static str },

    /// A required header is absent from a sheet.
    #[error("{sheet} sheet is missing the '{column}' column")]
    MissingColumn {
        sheet: &'static str,
        column: &'static str,
    },
}

/// Failure to write a filtered dataset to CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot create export directory '{path}': {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot flush '{path}': {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
