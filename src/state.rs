use eframe::egui::Color32;

use crate::chart::{Chart, ChartKind};
use crate::color::{series_color, series_palette};

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Legends with more entries than this start hidden; the overlay chart has
/// one entry per player.
pub const LEGEND_AUTO_HIDE: usize = 16;

/// Everything the chart window needs, independent of rendering.
pub struct ViewState {
    pub chart: Chart,

    /// One colour per series, same order as `chart.series`.
    pub colors: Vec<Color32>,

    pub show_legend: bool,

    /// Draw a marker on every data point in addition to the line.
    pub show_points: bool,
}

impl ViewState {
    pub fn new(chart: Chart) -> Self {
        let palette = series_palette(chart.series.len());
        let colors = (0..chart.series.len())
            .map(|i| series_color(&palette, i))
            .collect();
        let show_legend = chart.series.len() <= LEGEND_AUTO_HIDE;

        Self {
            chart,
            colors,
            show_legend,
            show_points: false,
        }
    }

    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
    }

    pub fn toggle_points(&mut self) {
        self.show_points = !self.show_points;
    }

    /// Status line shown next to the title.
    pub fn summary_line(&self) -> String {
        let players = count(self.chart.players, "player");
        let levels = count(self.chart.levels, "level");
        match self.chart.kind {
            ChartKind::Average => format!("average of {players}, {levels}"),
            ChartKind::Overlay => format!("{players}, {levels}"),
        }
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
