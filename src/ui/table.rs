// src/ui/table.rs
use chrono::Local;
use eframe::egui;
use rfd::FileDialog;

use crate::export;
use crate::state::AppState;

/// The pivoted table: one row per company, one column per calendar year,
/// zebra-striped, with an export button for the currently displayed data.
pub fn show_table(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading(format!("{} by Company", state.view.pivot.metric.label()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Export CSV").clicked() {
                export_pivot(state);
            }
        });
    });
    ui.add_space(4.0);

    let pivot = &state.view.pivot;
    egui::ScrollArea::horizontal()
        .id_source("pivot_scroll")
        .show(ui, |ui| {
            egui::Grid::new("pivot_table")
                .striped(true)
                .min_col_width(90.0)
                .show(ui, |ui| {
                    ui.strong("Company");
                    for year in &pivot.years {
                        ui.strong(year.to_string());
                    }
                    ui.end_row();

                    for row in &pivot.rows {
                        ui.label(&row.company);
                        for cell in &row.cells {
                            match cell {
                                Some(value) => {
                                    // Values are rounded at load time.
                                    ui.label(format!("{:.0}", value));
                                }
                                // Missing (company, year) combinations stay blank.
                                None => {
                                    ui.label("");
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });

    if let Some(status) = state.status_message.clone() {
        ui.add_space(4.0);
        ui.weak(status);
    }
}

fn export_pivot(state: &mut AppState) {
    let metric_slug = state
        .view
        .pivot
        .metric
        .label()
        .to_lowercase()
        .replace(' ', "_");
    let default_name = format!(
        "{}_{}.csv",
        metric_slug,
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let dialog = FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .set_file_name(&default_name)
        .set_title("Export Table");

    if let Some(path) = dialog.save_file() {
        match export::write_pivot_csv(&state.view.pivot, &path) {
            Ok(()) => {
                state.status_message = Some(format!("Exported table to {}", path.display()));
            }
            Err(e) => {
                state.error_message = Some(format!("Error exporting table: {}", e));
            }
        }
    }
}
