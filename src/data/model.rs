use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Column names shared by both sheets and the exported files
// ---------------------------------------------------------------------------

pub const JOB_TITLE: &str = "Job Title";
pub const AVERAGE_SALARY: &str = "Average Salary";
pub const MINIMUM_SALARY: &str = "Minimum Salary";
pub const MAXIMUM_SALARY: &str = "Maximum Salary";
pub const ROLE_FIELD: &str = "Role Field/Scope";
pub const SENIORITY_LEVEL: &str = "Seniority Level";
pub const COUNTRY: &str = "Country";
pub const SALARY_USD: &str = "Salary (USD)";

/// Display order of the US columns.
pub const US_COLUMNS: [&str; 6] = [
    JOB_TITLE,
    AVERAGE_SALARY,
    MINIMUM_SALARY,
    MAXIMUM_SALARY,
    ROLE_FIELD,
    SENIORITY_LEVEL,
];

/// Display order of the reshaped Global columns.
pub const GLOBAL_COLUMNS: [&str; 5] = [JOB_TITLE, COUNTRY, SALARY_USD, ROLE_FIELD, SENIORITY_LEVEL];

// ---------------------------------------------------------------------------
// Cell – a single value of a sheet or display table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Number(v) if v.fract() == 0.0 => write!(f, "{v:.0}"),
            Cell::Number(v) => write!(f, "{v:.2}"),
            Cell::Empty => Ok(()),
        }
    }
}

impl Cell {
    /// Text content, `None` for empty cells. Numbers are rendered.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(_) => Some(self.to_string()),
            Cell::Empty => None,
        }
    }

    /// Numeric content. Text is accepted when it parses as a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Empty => None,
        }
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Number)
    }
}

impl From<Option<&str>> for Cell {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Cell::Empty, |s| Cell::Text(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Table – header plus rows, used for raw sheets and for display
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row`/`col`, `Empty` when the row is shorter than the header.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&Cell::Empty)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Filterable rows
// ---------------------------------------------------------------------------

/// The three columns every salary dataset can be filtered on.
pub trait SalaryRow {
    fn job_title(&self) -> Option<&str>;
    fn department(&self) -> Option<&str>;
    fn level(&self) -> Option<&str>;
}

// ---------------------------------------------------------------------------
// US sheet
// ---------------------------------------------------------------------------

/// One row of the US sheet. Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsSalary {
    #[serde(rename = "Job Title")]
    pub job_title: Option<String>,
    #[serde(rename = "Average Salary")]
    pub average_salary: Option<f64>,
    #[serde(rename = "Minimum Salary")]
    pub minimum_salary: Option<f64>,
    #[serde(rename = "Maximum Salary")]
    pub maximum_salary: Option<f64>,
    #[serde(rename = "Role Field/Scope")]
    pub department: Option<String>,
    #[serde(rename = "Seniority Level")]
    pub level: Option<String>,
}

impl SalaryRow for UsSalary {
    fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }
    fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }
    fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }
}

/// Lay out US records in the fixed [`US_COLUMNS`] order.
pub fn project_us(records: &[UsSalary]) -> Table {
    let mut table = Table::new(US_COLUMNS.iter().map(|c| c.to_string()).collect());
    table.rows = records
        .iter()
        .map(|r| {
            vec![
                Cell::from(r.job_title.as_deref()),
                Cell::from(r.average_salary),
                Cell::from(r.minimum_salary),
                Cell::from(r.maximum_salary),
                Cell::from(r.department.as_deref()),
                Cell::from(r.level.as_deref()),
            ]
        })
        .collect();
    table
}

// ---------------------------------------------------------------------------
// Global sheet (wide form)
// ---------------------------------------------------------------------------

/// A salary cell in a country column, in the local currency.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalSalary {
    Amount(f64),
    Missing,
    /// Text that does not parse as a number. Error cells load as `Missing`.
    Invalid(String),
}

impl LocalSalary {
    /// The amount when it can be converted: finite and strictly positive.
    pub fn usable(&self) -> Option<f64> {
        match self {
            LocalSalary::Amount(v) if v.is_finite() && *v > 0.0 => Some(*v),
            _ => None,
        }
    }
}

impl From<&Cell> for LocalSalary {
    fn from(cell: &Cell) -> Self {
        match cell {
            Cell::Number(v) => LocalSalary::Amount(*v),
            Cell::Empty => LocalSalary::Missing,
            Cell::Text(s) if s.trim().is_empty() => LocalSalary::Missing,
            Cell::Text(s) => s
                .trim()
                .parse()
                .map(LocalSalary::Amount)
                .unwrap_or_else(|_| LocalSalary::Invalid(s.clone())),
        }
    }
}

/// One job title with a salary cell per country column.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalWideRecord {
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub level: Option<String>,
    /// Aligned with [`GlobalWideSheet::countries`].
    pub salaries: Vec<LocalSalary>,
}

impl SalaryRow for GlobalWideRecord {
    fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }
    fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }
    fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }
}

/// The Global sheet: country column names plus the wide rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalWideSheet {
    pub countries: Vec<String>,
    pub records: Vec<GlobalWideRecord>,
}

impl GlobalWideSheet {
    /// Same countries, only the given records.
    pub fn with_records(&self, records: Vec<GlobalWideRecord>) -> Self {
        GlobalWideSheet {
            countries: self.countries.clone(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Global salaries (long form)
// ---------------------------------------------------------------------------

/// One (job title, country) salary converted to USD.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalSalary {
    #[serde(rename = "Job Title")]
    pub job_title: Option<String>,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Salary (USD)")]
    pub salary_usd: f64,
    #[serde(rename = "Role Field/Scope")]
    pub department: Option<String>,
    #[serde(rename = "Seniority Level")]
    pub level: Option<String>,
}

impl SalaryRow for GlobalSalary {
    fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }
    fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }
    fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us(title: &str) -> UsSalary {
        UsSalary {
            job_title: Some(title.to_string()),
            average_salary: Some(95000.0),
            minimum_salary: None,
            maximum_salary: Some(120000.5),
            department: Some("Engineering".to_string()),
            level: Some("Senior".to_string()),
        }
    }

    #[test]
    fn project_us_uses_fixed_column_order() {
        let table = project_us(&[us("Gameplay Programmer")]);
        assert_eq!(table.columns, US_COLUMNS.map(String::from).to_vec());
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0][0], Cell::Text("Gameplay Programmer".into()));
        assert_eq!(table.rows[0][2], Cell::Empty);
        assert_eq!(table.rows[0][5], Cell::Text("Senior".into()));
    }

    #[test]
    fn project_us_of_nothing_keeps_header() {
        let table = project_us(&[]);
        assert_eq!(table.columns.len(), 6);
        assert!(table.is_empty());
    }

    #[test]
    fn local_salary_classifies_cells() {
        assert_eq!(LocalSalary::from(&Cell::Number(10.0)), LocalSalary::Amount(10.0));
        assert_eq!(LocalSalary::from(&Cell::Empty), LocalSalary::Missing);
        assert_eq!(LocalSalary::from(&Cell::Text("  ".into())), LocalSalary::Missing);
        assert_eq!(LocalSalary::from(&Cell::Text("4200".into())), LocalSalary::Amount(4200.0));
        assert_eq!(
            LocalSalary::from(&Cell::Text("n/a".into())),
            LocalSalary::Invalid("n/a".into())
        );
    }

    #[test]
    fn only_positive_finite_amounts_are_usable() {
        assert_eq!(LocalSalary::Amount(1.5).usable(), Some(1.5));
        assert_eq!(LocalSalary::Amount(0.0).usable(), None);
        assert_eq!(LocalSalary::Amount(-3.0).usable(), None);
        assert_eq!(LocalSalary::Amount(f64::NAN).usable(), None);
        assert_eq!(LocalSalary::Amount(f64::INFINITY).usable(), None);
        assert_eq!(LocalSalary::Missing.usable(), None);
        assert_eq!(LocalSalary::Invalid("x".into()).usable(), None);
    }

    #[test]
    fn cell_display_drops_trailing_zero_fraction() {
        assert_eq!(Cell::Number(34000.0).to_string(), "34000");
        assert_eq!(Cell::Number(1234.567).to_string(), "1234.57");
        assert_eq!(Cell::Empty.to_string(), "");
    }

    #[test]
    fn short_rows_read_as_empty() {
        let mut table = Table::new(vec!["a".into(), "b".into()]);
        table.rows.push(vec![Cell::Number(1.0)]);
        assert_eq!(table.cell(0, 1), &Cell::Empty);
        assert_eq!(table.cell(5, 0), &Cell::Empty);
    }
}
