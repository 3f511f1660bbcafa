use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::FilterCriteria;

/// Browse and export games industry salaries.
#[derive(Debug, Clone, Parser)]
#[command(name = "salary-dashboard", version, about)]
pub struct Cli {
    /// Salary workbook (sheet 0: US, sheet 1: Global).
    #[arg(long, default_value = "./data/salary_data.xlsx")]
    pub data: PathBuf,

    /// Directory the CSV exports are written to.
    #[arg(long, default_value = ".")]
    pub export_dir: PathBuf,

    /// Only job titles containing this text (case-insensitive).
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only this Role Field/Scope. Repeat to allow several.
    #[arg(long = "department", value_name = "NAME")]
    pub departments: Vec<String>,

    /// Only this Seniority Level. Repeat to allow several.
    #[arg(long = "level", value_name = "NAME")]
    pub levels: Vec<String>,

    /// Write both CSV exports and exit without opening a window.
    #[arg(long)]
    pub headless: bool,
}

impl Cli {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.search.clone(),
            self.departments.iter().cloned(),
            self.levels.iter().cloned(),
        )
    }
}
