// src/state.rs
use crate::data::Dataset;
use crate::reshape::{build_view, DashboardView, Selection};

/// Core application state: the shared read-only dataset, the session's
/// selection, and the view derived from them. The view is cached and only
/// recomputed when a control changes.
pub struct AppState {
    pub dataset: Dataset,
    pub selection: Selection,
    pub view: DashboardView,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let selection = Selection::default();
        let view = build_view(&dataset, &selection);
        Self {
            dataset,
            selection,
            view,
            error_message: None,
            status_message: None,
        }
    }

    /// The single recompute entry point, invoked after any control change.
    pub fn refresh_view(&mut self) {
        self.view = build_view(&self.dataset, &self.selection);
    }
}
