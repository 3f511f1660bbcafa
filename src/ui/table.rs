use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Cell, Table};
use crate::data::pipeline::DashboardView;

// ---------------------------------------------------------------------------
// Salary tables (central panel)
// ---------------------------------------------------------------------------

/// Render the US and Global tables, one above the other.
pub fn salary_tables(ui: &mut Ui, view: &DashboardView) {
    let half = (ui.available_height() / 2.0 - 40.0).max(120.0);

    ui.heading("US Salaries");
    data_table(ui, "us_table", &view.us_table(), half);

    ui.add_space(12.0);

    ui.heading("Global Salaries");
    data_table(ui, "global_table", &view.global_table(), half);
}

/// Header row always shows; an empty result gets an empty body.
fn data_table(ui: &mut Ui, id: &str, table: &Table, max_height: f32) {
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size;

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(max_height)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(80.0).clip(true), table.columns.len())
            .header(24.0, |mut header| {
                for name in &table.columns {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(text_height + 6.0, table.len(), |mut row| {
                    let index = row.index();
                    for col in 0..table.columns.len() {
                        row.col(|ui| {
                            let cell = table.cell(index, col);
                            match cell {
                                Cell::Number(_) => ui.monospace(cell.to_string()),
                                _ => ui.label(cell.to_string()),
                            };
                        });
                    }
                });
            });
    });

    if table.is_empty() {
        ui.label(RichText::new("No rows match the current filters.").italics());
    }
}
