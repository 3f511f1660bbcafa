use std::collections::HashMap;

/// Local currency → USD multipliers, keyed by lowercase country name.
const USD_RATES: &[(&str, f64)] = &[
    ("argentina", 0.00105),
    ("australia", 0.65),
    ("austria", 1.06),
    ("bahamas", 1.00),
    ("belgium", 1.06),
    ("brazil", 0.21),
    ("bulgaria", 0.55),
    ("canada", 0.73),
    ("chile", 0.00109),
    ("china", 0.14),
    ("colombia", 0.00025),
    ("czech republic", 0.046),
    ("denmark", 0.14),
    ("england", 1.31),
    ("finland", 1.06),
    ("france", 1.06),
    ("germany", 1.06),
    ("iceland", 0.007),
    ("india", 0.012),
    ("indonesia", 0.000066),
    ("iran", 0.000024),
    ("ireland", 1.06),
    ("italy", 1.06),
    ("japan", 0.0068),
    ("malaysia", 0.23),
    ("malta", 1.06),
    ("mexico", 0.059),
    ("morocco", 0.098),
    ("nepal", 0.0076),
    ("netherlands", 1.06),
    ("new zealand", 0.59),
    ("norway", 0.093),
    ("philippines", 0.018),
    ("poland", 0.25),
    ("portugal", 1.06),
    ("puerto rico", 1.00),
    ("russia", 0.011),
    ("scotland", 1.31),
    ("serbia", 0.0086),
    ("singapore", 0.73),
    ("south africa", 0.052),
    ("spain", 1.06),
    ("sri lanka", 0.0031),
    ("sweden", 0.093),
    ("taiwan", 0.031),
    ("thailand", 0.028),
    ("ukraine", 0.027),
    ("united kingdom", 1.31),
];

/// Multiplier applied when a country has no entry: the value is taken as USD.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Static country → USD multiplier lookup.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    rates: HashMap<String, f64>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::from_pairs(USD_RATES.iter().copied())
    }
}

impl CurrencyTable {
    /// Build a table from `(country, multiplier)` pairs. Keys are lowercased.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        CurrencyTable {
            rates: pairs
                .into_iter()
                .map(|(country, rate)| (country.to_lowercase(), rate))
                .collect(),
        }
    }

    /// Exact, case-insensitive lookup. Unknown countries get [`DEFAULT_MULTIPLIER`].
    pub fn multiplier(&self, country: &str) -> f64 {
        self.rates
            .get(&country.to_lowercase())
            .copied()
            .unwrap_or(DEFAULT_MULTIPLIER)
    }

    pub fn contains(&self, country: &str) -> bool {
        self.rates.contains_key(&country.to_lowercase())
    }

    /// Countries of `countries` with no rate, in the given order.
    pub fn unknown<'a>(&self, countries: &'a [String]) -> Vec<&'a str> {
        countries
            .iter()
            .filter(|c| !self.contains(c))
            .map(String::as_str)
            .collect()
    }
}
