// src/ui/controls.rs
use eframe::egui;

use crate::data::Metric;
use crate::state::AppState;

/// Draws the two filter dropdowns. Returns true if either control changed,
/// which triggers a view recompute in the caller.
pub fn show_controls(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Companies:");

        let summary = company_summary(state);
        let companies: Vec<String> = state.dataset.companies().to_vec();

        egui::ComboBox::from_id_source("company_filter")
            .selected_text(summary)
            .width(260.0)
            .show_ui(ui, |ui| {
                // Entries toggle in place; deselecting everything is allowed
                // and falls back to the default set when filtering.
                for company in &companies {
                    let mut selected = state.selection.companies.contains(company);
                    if ui.checkbox(&mut selected, company.as_str()).changed() {
                        state.selection.toggle_company(company);
                        changed = true;
                    }
                }
            });

        ui.add_space(16.0);

        ui.label("Metric:");
        egui::ComboBox::from_id_source("metric_select")
            .selected_text(state.selection.metric.label())
            .width(200.0)
            .show_ui(ui, |ui| {
                // Single-select, not clearable: one metric is always chosen.
                for metric in Metric::ALL {
                    if ui
                        .selectable_value(&mut state.selection.metric, metric, metric.label())
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });

    changed
}

fn company_summary(state: &AppState) -> String {
    let selected = &state.selection.companies;
    match selected.len() {
        0 => "Default (5 companies)".to_string(),
        1..=3 => selected
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        n => format!("{} companies", n),
    }
}
