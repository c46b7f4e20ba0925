//! Aggregate per-player level telemetry from CSV exports and plot it.
//!
//! Every metric (moves, resets, stars, ...) is one CSV file per play
//! session. The files for a metric are concatenated across sessions into a
//! [`data::model::LevelMatrix`], reduced to per-level averages and
//! per-player lines, and handed to a [`render::Renderer`].

pub mod app;
pub mod chart;
pub mod color;
pub mod data;
pub mod render;
pub mod state;
pub mod summary;
pub mod ui;
