// src/app.rs
use eframe::egui;

use crate::data::Dataset;
use crate::state::AppState;

pub struct StockDashApp {
    state: AppState,
}

impl StockDashApp {
    /// The default selection is applied before the first frame, so the
    /// dashboard opens already populated.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for StockDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            // Any control change recomputes the derived view before the
            // renderers below read it, so chart and table never disagree.
            if crate::ui::controls::show_controls(ui, &mut self.state) {
                self.state.refresh_view();
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                crate::ui::chart::show_chart(ui, &self.state.view);
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);
                crate::ui::table::show_table(ui, &mut self.state);
            });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
