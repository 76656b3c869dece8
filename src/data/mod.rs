// src/data/mod.rs
pub mod loader;
pub mod metric;

// Re-export commonly used types
pub use loader::{Dataset, FinancialRow};
pub use metric::Metric;
