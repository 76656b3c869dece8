// src/ui/chart.rs
use eframe::egui;
use egui_plot::{Legend, Line, Plot, Points};

use crate::reshape::DashboardView;

// Fixed series palette, assigned in legend (alphabetical) order.
const SERIES_COLORS: [egui::Color32; 8] = [
    egui::Color32::from_rgb(248, 118, 109),
    egui::Color32::from_rgb(196, 154, 0),
    egui::Color32::from_rgb(83, 180, 0),
    egui::Color32::from_rgb(0, 192, 148),
    egui::Color32::from_rgb(0, 182, 235),
    egui::Color32::from_rgb(165, 138, 255),
    egui::Color32::from_rgb(251, 97, 215),
    egui::Color32::from_rgb(149, 144, 110),
];

/// One line per company with markers at each observation, years on the
/// x-axis, the selected metric on the y-axis. Stateless: everything shown
/// comes from the view passed in.
pub fn show_chart(ui: &mut egui::Ui, view: &DashboardView) {
    ui.heading(format!("{} by Calendar Year", view.pivot.metric.label()));
    ui.add_space(4.0);

    let plot = Plot::new("metric_chart")
        .height(420.0)
        .legend(Legend::default())
        .allow_zoom(false)
        .allow_drag(false)
        .include_y(0.0);

    plot.show(ui, |plot_ui| {
        for (idx, series) in view.series.iter().enumerate() {
            let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
            let points: Vec<[f64; 2]> = series
                .points
                .iter()
                .map(|(year, value)| [*year as f64, *value])
                .collect();

            plot_ui.line(
                Line::new(points.clone())
                    .name(&series.company)
                    .color(color)
                    .width(4.0),
            );
            // Markers share the series name so the legend shows one entry.
            plot_ui.points(
                Points::new(points)
                    .name(&series.company)
                    .color(color)
                    .radius(4.0),
            );
        }
    });
}
