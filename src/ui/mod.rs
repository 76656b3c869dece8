// src/ui/mod.rs
pub mod chart;
pub mod controls;
pub mod table;
