use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::currency::CurrencyTable;
use crate::data::export::{export_global, export_us};
use crate::data::filter::FilterCriteria;
use crate::data::options::FilterOptions;
use crate::data::pipeline::{DashboardView, SalaryData};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Only raw widget inputs live here; the filtered view is recomputed from
/// `data` whenever it is needed.
pub struct AppState {
    /// Loaded datasets, read-only between loads.
    pub data: SalaryData,

    /// Where the datasets came from.
    pub source: PathBuf,

    /// Department / level choices for the selectors.
    pub options: FilterOptions,

    pub rates: CurrencyTable,

    /// Search box contents.
    pub search: String,

    pub selected_departments: BTreeSet<String>,

    pub selected_levels: BTreeSet<String>,

    /// Directory the CSV exports are written to.
    pub export_dir: PathBuf,

    /// Status line: success or error of the last action.
    pub status: Option<Status>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

impl AppState {
    pub fn new(data: SalaryData, source: PathBuf, export_dir: PathBuf) -> Self {
        let options = data.options();
        Self {
            data,
            source,
            options,
            rates: CurrencyTable::default(),
            search: String::new(),
            selected_departments: BTreeSet::new(),
            selected_levels: BTreeSet::new(),
            export_dir,
            status: None,
        }
    }

    /// Seed the inputs, e.g. from command line flags. Departments and levels
    /// that are not among the options are dropped, since no checkbox could
    /// show or clear them.
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.search = criteria.text;
        self.selected_departments = known(criteria.departments, &self.options.departments);
        self.selected_levels = known(criteria.levels, &self.options.levels);
        self
    }

    /// Snapshot of the current inputs.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            text: self.search.clone(),
            departments: self.selected_departments.clone(),
            levels: self.selected_levels.clone(),
        }
    }

    /// Full recomputation for the current inputs.
    pub fn view(&self) -> DashboardView {
        self.data.view(&self.criteria(), &self.rates)
    }

    /// Replace the datasets, rebuild the options and clear the selections.
    pub fn set_data(&mut self, data: SalaryData, source: PathBuf) {
        self.options = data.options();
        self.data = data;
        self.source = source;
        self.selected_departments.clear();
        self.selected_levels.clear();
        self.status = None;
    }

    /// Load another workbook. On failure the current data is kept.
    pub fn open(&mut self, path: &Path) {
        match SalaryData::load(path) {
            Ok(data) => {
                self.set_data(data, path.to_path_buf());
                self.status = Some(Status::Info(format!("Loaded {}", path.display())));
            }
            Err(e) => {
                log::error!("Failed to load workbook: {e}");
                self.status = Some(Status::Error(format!("Error: {e}")));
            }
        }
    }

    /// Toggle a single value in a selection set.
    pub fn toggle(selected: &mut BTreeSet<String>, value: &str) {
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
    }

    pub fn export_us(&mut self) {
        let view = self.view();
        let result = export_us(&view.us, &self.export_dir).context("US export failed");
        self.report_export("US", result);
    }

    pub fn export_global(&mut self) {
        let view = self.view();
        let result = export_global(&view.global, &self.export_dir).context("Global export failed");
        self.report_export("Global", result);
    }

    fn report_export(&mut self, label: &str, result: Result<PathBuf>) {
        self.status = Some(match result {
            Ok(path) => Status::Info(format!("{label} data exported to {}", path.display())),
            Err(e) => {
                log::error!("{e:#}");
                Status::Error(format!("{e:#}"))
            }
        });
    }
}

fn known(selected: BTreeSet<String>, options: &[String]) -> BTreeSet<String> {
    selected
        .into_iter()
        .filter(|value| {
            let offered = options.contains(value);
            if !offered {
                log::warn!("ignoring unknown filter value '{value}'");
            }
            offered
        })
        .collect()
}
