use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Render every series of the current chart as a line over level indices.
pub fn chart_plot(ui: &mut Ui, state: &ViewState) {
    let chart = &state.chart;

    if chart.series.iter().all(|s| s.points.is_empty()) {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No levels to plot");
        });
        return;
    }

    let mut plot = Plot::new("chart_plot")
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if state.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for (series, &color) in chart.series.iter().zip(state.colors.iter()) {
            let line = Line::new(PlotPoints::from(series.points.clone()))
                .name(&series.name)
                .color(color)
                .width(1.5);
            plot_ui.line(line);

            if state.show_points {
                let markers = Points::new(PlotPoints::from(series.points.clone()))
                    .name(&series.name)
                    .color(color)
                    .radius(2.5);
                plot_ui.points(markers);
            }
        }
    });
}
