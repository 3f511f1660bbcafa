use super::currency::CurrencyTable;
use super::model::{Cell, GlobalSalary, GlobalWideSheet, LocalSalary, Table, GLOBAL_COLUMNS};

/// Turn wide Global rows into one USD record per (job title, country).
///
/// Rows are visited in order and, within a row, countries in column order.
/// Cells that are missing, not numeric, not finite or not strictly positive
/// produce no record.
pub fn reshape_global(sheet: &GlobalWideSheet, rates: &CurrencyTable) -> Vec<GlobalSalary> {
    let mut out = Vec::new();

    for record in &sheet.records {
        for (country, salary) in sheet.countries.iter().zip(&record.salaries) {
            let Some(amount) = salary.usable() else {
                if let LocalSalary::Invalid(raw) = salary {
                    log::trace!("skipping non-numeric salary '{raw}' for {country}");
                }
                continue;
            };

            out.push(GlobalSalary {
                job_title: record.job_title.clone(),
                country: country.clone(),
                salary_usd: amount * rates.multiplier(country),
                department: record.department.clone(),
                level: record.level.clone(),
            });
        }
    }

    out
}

/// Display table of reshaped records in [`GLOBAL_COLUMNS`] order.
pub fn long_table(records: &[GlobalSalary]) -> Table {
    let mut table = Table::new(GLOBAL_COLUMNS.iter().map(|c| c.to_string()).collect());
    table.rows = records
        .iter()
        .map(|r| {
            vec![
                Cell::from(r.job_title.as_deref()),
                Cell::Text(r.country.clone()),
                Cell::Number(r.salary_usd),
                Cell::from(r.department.as_deref()),
                Cell::from(r.level.as_deref()),
            ]
        })
        .collect();
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::GlobalWideRecord;

    fn sheet(countries: &[&str], rows: Vec<(&str, Vec<LocalSalary>)>) -> GlobalWideSheet {
        GlobalWideSheet {
            countries: countries.iter().map(|c| c.to_string()).collect(),
            records: rows
                .into_iter()
                .map(|(title, salaries)| GlobalWideRecord {
                    job_title: Some(title.to_string()),
                    department: Some("Eng".to_string()),
                    level: Some("Senior".to_string()),
                    salaries,
                })
                .collect(),
        }
    }

    #[test]
    fn engineer_row_yields_only_the_japan_salary() {
        let wide = sheet(
            &["japan", "france", "brazil"],
            vec![(
                "Engineer",
                vec![
                    LocalSalary::Amount(5_000_000.0),
                    LocalSalary::Amount(0.0),
                    LocalSalary::Amount(f64::NAN),
                ],
            )],
        );
        let rates = CurrencyTable::from_pairs([("japan", 0.0068)]);

        let long = reshape_global(&wide, &rates);

        assert_eq!(long.len(), 1);
        let rec = &long[0];
        assert_eq!(rec.job_title.as_deref(), Some("Engineer"));
        assert_eq!(rec.country, "japan");
        assert!((rec.salary_usd - 34_000.0).abs() < 1e-6);
        assert_eq!(rec.department.as_deref(), Some("Eng"));
        assert_eq!(rec.level.as_deref(), Some("Senior"));
    }

    #[test]
    fn unknown_country_keeps_value() {
        let wide = sheet(&["atlantis"], vec![("Artist", vec![LocalSalary::Amount(100.0)])]);
        let long = reshape_global(&wide, &CurrencyTable::from_pairs([("japan", 0.0068)]));
        assert_eq!(long.len(), 1);
        assert_eq!(long[0].salary_usd, 100.0);
    }

    #[test]
    fn missing_invalid_and_negative_cells_are_skipped() {
        let wide = sheet(
            &["canada", "spain", "india"],
            vec![(
                "Producer",
                vec![
                    LocalSalary::Missing,
                    LocalSalary::Invalid("#N/A".into()),
                    LocalSalary::Amount(-10.0),
                ],
            )],
        );
        assert!(reshape_global(&wide, &CurrencyTable::default()).is_empty());
    }

    #[test]
    fn output_is_row_major_in_column_order() {
        let wide = sheet(
            &["canada", "spain"],
            vec![
                ("A", vec![LocalSalary::Amount(1.0), LocalSalary::Amount(2.0)]),
                ("B", vec![LocalSalary::Missing, LocalSalary::Amount(3.0)]),
            ],
        );
        let long = reshape_global(&wide, &CurrencyTable::from_pairs(Vec::<(&str, f64)>::new()));
        let order: Vec<(String, String)> = long
            .iter()
            .map(|r| (r.job_title.clone().unwrap_or_default(), r.country.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("A".to_string(), "canada".to_string()),
                ("A".to_string(), "spain".to_string()),
                ("B".to_string(), "spain".to_string()),
            ]
        );
    }

    #[test]
    fn long_table_has_five_columns() {
        let wide = sheet(&["spain"], vec![("A", vec![LocalSalary::Amount(10.0)])]);
        let table = long_table(&reshape_global(&wide, &CurrencyTable::default()));
        assert_eq!(table.columns, GLOBAL_COLUMNS.map(String::from).to_vec());
        assert_eq!(table.rows[0][1], Cell::Text("spain".into()));
        assert_eq!(table.rows[0][2], Cell::Number(10.0 * 1.06));
    }
}
