use std::collections::BTreeSet;

use super::model::SalaryRow;

// ---------------------------------------------------------------------------
// Filter predicate: search text plus selected departments and levels
// ---------------------------------------------------------------------------

/// What the user asked to see. An empty component places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the job title.
    pub text: String,
    /// Accepted `Role Field/Scope` values.
    pub departments: BTreeSet<String>,
    /// Accepted `Seniority Level` values.
    pub levels: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new(
        text: impl Into<String>,
        departments: impl IntoIterator<Item = String>,
        levels: impl IntoIterator<Item = String>,
    ) -> Self {
        FilterCriteria {
            text: text.into(),
            departments: departments.into_iter().collect(),
            levels: levels.into_iter().collect(),
        }
    }

    /// True when no component constrains anything.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.departments.is_empty() && self.levels.is_empty()
    }

    /// A row passes when it satisfies every active component.
    ///
    /// * Missing job titles never match a non-empty search text.
    /// * Missing departments / levels are never members of a non-empty set.
    pub fn matches<R: SalaryRow + ?Sized>(&self, row: &R) -> bool {
        self.matches_text(row.job_title())
            && member_or_unconstrained(&self.departments, row.department())
            && member_or_unconstrained(&self.levels, row.level())
    }

    fn matches_text(&self, title: Option<&str>) -> bool {
        if self.text.is_empty() {
            return true;
        }
        match title {
            Some(title) => title.to_lowercase().contains(&self.text.to_lowercase()),
            None => false,
        }
    }
}

fn member_or_unconstrained(selected: &BTreeSet<String>, value: Option<&str>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.contains(v))
}

/// Return indices of rows that pass the criteria, in their original order.
pub fn filtered_indices<R: SalaryRow>(rows: &[R], criteria: &FilterCriteria) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| criteria.matches(*row))
        .map(|(i, _)| i)
        .collect()
}

/// Copy out the rows that pass the criteria, in their original order.
pub fn filter_rows<R: SalaryRow + Clone>(rows: &[R], criteria: &FilterCriteria) -> Vec<R> {
    rows.iter()
        .filter(|row| criteria.matches(*row))
        .cloned()
        .collect()
}
