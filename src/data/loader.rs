use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use super::currency::CurrencyTable;
use super::model::{
    Cell, GlobalWideRecord, GlobalWideSheet, LocalSalary, Table, UsSalary, AVERAGE_SALARY,
    JOB_TITLE, MAXIMUM_SALARY, MINIMUM_SALARY, ROLE_FIELD, SENIORITY_LEVEL,
};
use crate::error::LoadError;

const US_SHEET: &str = "US";
const GLOBAL_SHEET: &str = "Global";

/// Both datasets as read from the workbook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub us: Vec<UsSalary>,
    pub global: GlobalWideSheet,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the salary workbook: sheet 0 holds US data, sheet 1 Global data.
///
/// Any format calamine understands works (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`,
/// `.ods`).
pub fn load_workbook(path: &Path) -> Result<Workbook, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::MissingDataFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sheet_at = |index: usize, name: &'static str| -> Result<Table, LoadError> {
        let range = workbook
            .worksheet_range_at(index)
            .ok_or(LoadError::MissingSheet { index, name })?
            .map_err(|source| LoadError::MissingDataFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(range_to_table(&range))
    };

    let us = us_from_table(&sheet_at(0, US_SHEET)?)?;
    let global = global_from_table(&sheet_at(1, GLOBAL_SHEET)?)?;

    log::info!(
        "Loaded {} US rows and {} Global rows ({} countries) from {}",
        us.len(),
        global.len(),
        global.countries.len(),
        path.display()
    );
    if global.is_empty() {
        log::warn!("Global sheet of {} has no salary rows", path.display());
    }
    let unknown = CurrencyTable::default().unknown(&global.countries);
    if !unknown.is_empty() {
        log::debug!(
            "no USD rate for {} countries, their salaries are taken as USD: {}",
            unknown.len(),
            unknown.join(", ")
        );
    }

    Ok(Workbook { us, global })
}

// ---------------------------------------------------------------------------
// Sheet → Table
// ---------------------------------------------------------------------------

/// First row becomes the (trimmed) header; rows with no values are dropped.
pub fn range_to_table(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Table::default();
    };

    let mut table = Table::new(
        header
            .iter()
            .map(|c| data_to_cell(c).to_text().unwrap_or_default().trim().to_string())
            .collect(),
    );
    table.rows = rows
        .map(|r| r.iter().map(data_to_cell).collect::<Vec<_>>())
        .filter(|r| r.iter().any(|c| *c != Cell::Empty))
        .collect();
    table
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        other => Cell::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Table → typed datasets
// ---------------------------------------------------------------------------

fn require(table: &Table, sheet: &'static str, column: &'static str) -> Result<usize, LoadError> {
    table
        .column_index(column)
        .ok_or(LoadError::MissingColumn { sheet, column })
}

fn ensure_header(table: &Table, sheet: &'static str) -> Result<(), LoadError> {
    if table.columns.iter().all(|c| c.is_empty()) {
        return Err(LoadError::EmptySheet { sheet });
    }
    Ok(())
}

/// Read US records by header name, so column order in the sheet is irrelevant.
pub fn us_from_table(table: &Table) -> Result<Vec<UsSalary>, LoadError> {
    ensure_header(table, US_SHEET)?;
    let title = require(table, US_SHEET, JOB_TITLE)?;
    let avg = require(table, US_SHEET, AVERAGE_SALARY)?;
    let min = require(table, US_SHEET, MINIMUM_SALARY)?;
    let max = require(table, US_SHEET, MAXIMUM_SALARY)?;
    let dept = require(table, US_SHEET, ROLE_FIELD)?;
    let level = require(table, US_SHEET, SENIORITY_LEVEL)?;

    Ok((0..table.len())
        .map(|row| UsSalary {
            job_title: table.cell(row, title).to_text(),
            average_salary: table.cell(row, avg).as_f64(),
            minimum_salary: table.cell(row, min).as_f64(),
            maximum_salary: table.cell(row, max).as_f64(),
            department: table.cell(row, dept).to_text(),
            level: table.cell(row, level).to_text(),
        })
        .collect())
}

/// Read the Global sheet. Every column other than the three descriptive ones
/// is a country column, kept in sheet order.
pub fn global_from_table(table: &Table) -> Result<GlobalWideSheet, LoadError> {
    ensure_header(table, GLOBAL_SHEET)?;
    let title = require(table, GLOBAL_SHEET, JOB_TITLE)?;
    let dept = require(table, GLOBAL_SHEET, ROLE_FIELD)?;
    let level = require(table, GLOBAL_SHEET, SENIORITY_LEVEL)?;

    let country_cols: Vec<usize> = (0..table.columns.len())
        .filter(|i| ![title, dept, level].contains(i) && !table.columns[*i].is_empty())
        .collect();
    let countries = country_cols
        .iter()
        .map(|&i| table.columns[i].clone())
        .collect();

    let records = (0..table.len())
        .map(|row| GlobalWideRecord {
            job_title: table.cell(row, title).to_text(),
            department: table.cell(row, dept).to_text(),
            level: table.cell(row, level).to_text(),
            salaries: country_cols
                .iter()
                .map(|&col| LocalSalary::from(table.cell(row, col)))
                .collect(),
        })
        .collect();

    Ok(GlobalWideSheet { countries, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::US_COLUMNS;

    fn range(rows: &[Vec<Data>]) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), value.clone());
            }
        }
        range
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn us_sheet_is_read_by_header_name() {
        let table = range_to_table(&range(&[
            vec![
                s("Seniority Level"),
                s("Maximum Salary"),
                s("Job Title "),
                s("Role Field/Scope"),
                s("Average Salary"),
                s("Minimum Salary"),
                s("Notes"),
            ],
            vec![
                s("Senior"),
                Data::Float(150_000.0),
                s("Tools Programmer"),
                s("Programming"),
                Data::Int(120_000),
                s("95000"),
                s("ignored"),
            ],
        ]));

        let us = us_from_table(&table).unwrap();

        assert_eq!(
            us,
            vec![UsSalary {
                job_title: Some("Tools Programmer".into()),
                average_salary: Some(120_000.0),
                minimum_salary: Some(95_000.0),
                maximum_salary: Some(150_000.0),
                department: Some("Programming".into()),
                level: Some("Senior".into()),
            }]
        );
        let projected = crate::data::model::project_us(&us);
        assert_eq!(projected.columns, US_COLUMNS.map(String::from).to_vec());
    }

    #[test]
    fn missing_us_column_is_reported() {
        let table = range_to_table(&range(&[vec![
            s("Job Title"),
            s("Average Salary"),
            s("Minimum Salary"),
            s("Role Field/Scope"),
            s("Seniority Level"),
        ]]));
        let err = us_from_table(&table).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn {
                column: MAXIMUM_SALARY,
                ..
            }
        ));
    }

    #[test]
    fn global_sheet_keeps_country_columns_in_order() {
        let table = range_to_table(&range(&[
            vec![s("Job Title"), s("Role Field/Scope"), s("Seniority Level"), s("japan"), s("france"), s("brazil")],
            vec![s("Engineer"), s("Eng"), s("Senior"), Data::Float(5_000_000.0), Data::Int(0), Data::Empty],
            vec![s("Artist"), s("Art"), s("Junior"), s("n/a"), Data::Float(40_000.0), Data::Error(calamine::CellErrorType::NA)],
        ]));

        let global = global_from_table(&table).unwrap();

        assert_eq!(global.countries, vec!["japan", "france", "brazil"]);
        assert_eq!(global.len(), 2);
        assert_eq!(
            global.records[0].salaries,
            vec![LocalSalary::Amount(5_000_000.0), LocalSalary::Amount(0.0), LocalSalary::Missing]
        );
        assert_eq!(
            global.records[1].salaries,
            vec![LocalSalary::Invalid("n/a".into()), LocalSalary::Amount(40_000.0), LocalSalary::Missing]
        );
    }

    #[test]
    fn blank_rows_are_dropped() {
        let table = range_to_table(&range(&[
            vec![s("Job Title"), s("Role Field/Scope"), s("Seniority Level"), s("spain")],
            vec![Data::Empty, Data::Empty, Data::Empty, Data::Empty],
            vec![s("Writer"), s("Narrative"), s("Mid"), Data::Float(30_000.0)],
        ]));
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, 0), &Cell::Text("Writer".into()));
    }

    #[test]
    fn empty_sheet_is_an_error() {
        let err = global_from_table(&Table::default()).unwrap_err();
        assert!(matches!(err, LoadError::EmptySheet { sheet: "Global" }));
    }

    #[test]
    fn unreadable_file_is_missing_data() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("salary_data.xlsx");
        assert!(matches!(
            load_workbook(&absent),
            Err(LoadError::MissingDataFile { .. })
        ));

        let garbage = dir.path().join("garbage.xlsx");
        std::fs::write(&garbage, b"not a workbook").unwrap();
        assert!(matches!(
            load_workbook(&garbage),
            Err(LoadError::MissingDataFile { .. })
        ));
    }
}
