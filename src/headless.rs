use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::currency::CurrencyTable;
use crate::data::export::{export_global, export_us};
use crate::data::filter::FilterCriteria;
use crate::data::pipeline::SalaryData;

/// What a headless run wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub us_rows: usize,
    pub global_rows: usize,
    pub us_path: PathBuf,
    pub global_path: PathBuf,
}

/// Apply `criteria` and write both CSV exports into `export_dir`.
pub fn export_both(
    data: &SalaryData,
    criteria: &FilterCriteria,
    rates: &CurrencyTable,
    export_dir: &Path,
) -> Result<ExportSummary> {
    let view = data.view(criteria, rates);

    let us_path = export_us(&view.us, export_dir).context("US export failed")?;
    let global_path = export_global(&view.global, export_dir).context("Global export failed")?;

    Ok(ExportSummary {
        us_rows: view.us.len(),
        global_rows: view.global.len(),
        us_path,
        global_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{GlobalWideRecord, GlobalWideSheet, LocalSalary};

    #[test]
    fn writes_both_files_for_the_filtered_view() {
        let dir = tempfile::tempdir().unwrap();
        let data = SalaryData {
            us: Vec::new(),
            global: GlobalWideSheet {
                countries: vec!["japan".into(), "atlantis".into()],
                records: vec![GlobalWideRecord {
                    job_title: Some("Engineer".into()),
                    department: Some("Eng".into()),
                    level: Some("Senior".into()),
                    salaries: vec![LocalSalary::Amount(5_000_000.0), LocalSalary::Amount(100.0)],
                }],
            },
        };

        let summary =
            export_both(&data, &FilterCriteria::default(), &CurrencyTable::default(), dir.path())
                .unwrap();

        assert_eq!(summary.us_rows, 0);
        assert_eq!(summary.global_rows, 2);
        assert!(summary.us_path.exists());
        let global = std::fs::read_to_string(&summary.global_path).unwrap();
        assert_eq!(global.lines().count(), 3);
        assert!(global.contains("atlantis,100.0,Eng,Senior"));
    }
}
