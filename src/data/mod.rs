/// Data layer: salary types, loading, filtering, reshaping and export.
///
/// Architecture:
/// ```text
///   salary_data.xlsx (sheet 0: US, sheet 1: Global)
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  sheet → Table → typed rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  FilterCriteria → matching rows (both sheets)
///   └──────────┘
///        │                     │
///        ▼ US                  ▼ Global (wide)
///   ┌──────────────┐     ┌──────────┐
///   │ project_us   │     │ reshape  │  one USD row per country
///   └──────────────┘     └──────────┘
///        │                     │
///        ▼                     ▼
///      table display / CSV export
/// ```

pub mod currency;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod reshape;
