//! Games salary dashboard: load a two-sheet salary workbook, filter both
//! sheets by job title, department and seniority, convert Global salaries to
//! USD and show or export the result.

pub mod app;
pub mod cli;
pub mod data;
pub mod error;
pub mod headless;
pub mod state;
pub mod ui;
