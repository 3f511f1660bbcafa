use indexmap::IndexSet;

use super::model::SalaryRow;

/// Choices offered by the Department and Seniority Level selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub levels: Vec<String>,
}

/// Distinct departments and levels across both datasets, in first-seen order.
///
/// `us` rows are visited before `global` rows. Missing values are not offered.
pub fn filter_options<U: SalaryRow, G: SalaryRow>(us: &[U], global: &[G]) -> FilterOptions {
    let mut departments = IndexSet::new();
    let mut levels = IndexSet::new();

    let rows = us
        .iter()
        .map(|r| (r.department(), r.level()))
        .chain(global.iter().map(|r| (r.department(), r.level())));

    for (department, level) in rows {
        if let Some(d) = department {
            departments.insert(d.to_string());
        }
        if let Some(l) = level {
            levels.insert(l.to_string());
        }
    }

    FilterOptions {
        departments: departments.into_iter().collect(),
        levels: levels.into_iter().collect(),
    }
}
