use std::path::Path;

use super::currency::CurrencyTable;
use super::filter::{filter_rows, FilterCriteria};
use super::loader::{load_workbook, Workbook};
use super::model::{project_us, GlobalSalary, GlobalWideSheet, Table, UsSalary};
use super::options::{filter_options, FilterOptions};
use super::reshape::{long_table, reshape_global};
use crate::error::LoadError;

/// The two datasets, loaded once and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryData {
    pub us: Vec<UsSalary>,
    pub global: GlobalWideSheet,
}

/// Everything shown for one set of criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    /// Filtered US rows.
    pub us: Vec<UsSalary>,
    /// Filtered Global rows, still in wide form.
    pub global_wide: GlobalWideSheet,
    /// Filtered Global rows reshaped to USD long form.
    pub global: Vec<GlobalSalary>,
}

impl From<Workbook> for SalaryData {
    fn from(workbook: Workbook) -> Self {
        SalaryData {
            us: workbook.us,
            global: workbook.global,
        }
    }
}

impl SalaryData {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        load_workbook(path).map(Self::from)
    }

    /// Department and level choices across both unfiltered datasets.
    pub fn options(&self) -> FilterOptions {
        filter_options(&self.us, &self.global.records)
    }

    /// Recompute filter → reshape for both datasets from scratch.
    pub fn view(&self, criteria: &FilterCriteria, rates: &CurrencyTable) -> DashboardView {
        let us = filter_rows(&self.us, criteria);
        let global_wide = self
            .global
            .with_records(filter_rows(&self.global.records, criteria));
        let global = reshape_global(&global_wide, rates);

        log::trace!(
            "criteria {:?}: {} US rows, {} Global rows -> {} salaries",
            criteria,
            us.len(),
            global_wide.len(),
            global.len()
        );

        DashboardView {
            us,
            global_wide,
            global,
        }
    }
}

impl DashboardView {
    /// US rows in display column order.
    pub fn us_table(&self) -> Table {
        project_us(&self.us)
    }

    /// Global rows in long display form.
    pub fn global_table(&self) -> Table {
        long_table(&self.global)
    }
}
