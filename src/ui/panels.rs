use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::pipeline::DashboardView;
use crate::state::{AppState, Status};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong("Search by Job Title");
    ui.add(
        egui::TextEdit::singleline(&mut state.search)
            .hint_text("e.g. engineer")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    // Clone the option lists so the selections can be mutated inside the loop.
    let departments = state.options.departments.clone();
    let levels = state.options.levels.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - 80.0).max(120.0))
        .show(ui, |ui: &mut Ui| {
            multiselect(ui, "Department", &departments, &mut state.selected_departments);
            multiselect(ui, "Seniority Level", &levels, &mut state.selected_levels);
        });

    ui.separator();
    ui.strong("Export");
    if ui.button("Export US Data as CSV").clicked() {
        state.export_us();
    }
    if ui.button("Export Global Data as CSV").clicked() {
        state.export_global();
    }
}

/// Collapsible checklist. Nothing checked means no constraint.
fn multiselect(ui: &mut Ui, label: &str, options: &[String], selected: &mut BTreeSet<String>) {
    let header_text = if selected.is_empty() {
        format!("{label}  (all)")
    } else {
        format!("{label}  ({}/{})", selected.len(), options.len())
    };

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            if ui
                .add_enabled(!selected.is_empty(), egui::Button::new("Clear").small())
                .clicked()
            {
                selected.clear();
            }

            for value in options {
                let mut checked = selected.contains(value);
                if ui.checkbox(&mut checked, value.as_str()).changed() {
                    AppState::toggle(selected, value);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, view: &DashboardView) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(RichText::new("👾 Games Salary Dashboard").strong());
        ui.separator();

        ui.label(format!(
            "US: {} of {} rows  ·  Global: {} of {} job titles, {} salaries",
            view.us.len(),
            state.data.us.len(),
            view.global_wide.len(),
            state.data.global.len(),
            view.global.len(),
        ));

        ui.separator();

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.label(RichText::new(msg).color(Color32::from_rgb(80, 180, 80)));
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary workbook")
        .add_filter("Spreadsheets", &["xlsx", "xlsm", "xlsb", "xls", "ods"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
