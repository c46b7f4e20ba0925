use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use log::info;
use plotters::prelude::*;

use crate::app::ChartApp;
use crate::chart::{Chart, average_chart, overlay_chart};
use crate::color::{series_color, series_palette};
use crate::data::metric::Metric;
use crate::data::model::LevelMatrix;
use crate::state::{LEGEND_AUTO_HIDE, ViewState};

/// Displays or stores a finished chart.
pub trait Renderer {
    fn render(&mut self, chart: &Chart) -> Result<()>;
}

/// Render both charts of a metric: the average first, then the overlay.
pub fn render_metric(
    renderer: &mut dyn Renderer,
    metric: Metric,
    matrix: &LevelMatrix,
) -> Result<()> {
    renderer.render(&average_chart(metric, matrix))?;
    renderer.render(&overlay_chart(metric, matrix))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive window (blocks until closed)
// ---------------------------------------------------------------------------

pub struct WindowRenderer {
    pub size: [f32; 2],
}

impl Default for WindowRenderer {
    fn default() -> Self {
        Self {
            size: [1000.0, 650.0],
        }
    }
}

impl Renderer for WindowRenderer {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(chart.title.clone())
                .with_inner_size(self.size)
                .with_min_inner_size([400.0, 300.0]),
            run_and_return: true,
            ..Default::default()
        };

        info!("showing '{}' (close the window to continue)", chart.title);
        let state = ViewState::new(chart.clone());
        eframe::run_native(
            &chart.title,
            options,
            Box::new(move |_cc| Ok(Box::new(ChartApp::new(state)))),
        )
        .map_err(|e| anyhow!("plot window for '{}' failed: {e}", chart.title))
    }
}

// ---------------------------------------------------------------------------
// PNG files (headless)
// ---------------------------------------------------------------------------

/// Writes every chart to `<dir>/<slug>.png` instead of showing it.
pub struct PngRenderer {
    dir: PathBuf,
    size: (u32, u32),
}

impl PngRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        Ok(Self {
            dir,
            size: (1280, 720),
        })
    }

    pub fn path_for(&self, chart: &Chart) -> PathBuf {
        self.dir.join(format!("{}.png", slug(&chart.title)))
    }
}

impl Renderer for PngRenderer {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        let path = self.path_for(chart);
        draw_png(&path, chart, self.size)
            .map_err(|e| anyhow!("drawing {}: {e}", path.display()))?;
        info!("saved '{}' to {}", chart.title, path.display());
        Ok(())
    }
}

/// File-name-safe form of a chart title: lower case, runs of anything but
/// ASCII letters and digits collapsed to one `_`.
pub fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

fn draw_png(path: &Path, chart: &Chart, size: (u32, u32)) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let ([x_min, x_max], [y_min, y_max]) = chart.bounds();
    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .x_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    let palette = series_palette(chart.series.len());
    for (i, series) in chart.series.iter().enumerate() {
        let c = series_color(&palette, i);
        let color = RGBColor(c.r(), c.g(), c.b());
        ctx.draw_series(LineSeries::new(
            series.points.iter().map(|p| (p[0], p[1])),
            color.stroke_width(2),
        ))?
        .label(series.name.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    if chart.series.len() <= LEGEND_AUTO_HIDE {
        ctx.configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK.mix(0.3))
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<String>);

    impl Renderer for Recorder {
        fn render(&mut self, chart: &Chart) -> Result<()> {
            self.0.push(chart.title.clone());
            Ok(())
        }
    }

    #[test]
    fn slug_is_file_name_safe() {
        assert_eq!(slug("Average timesDestroyed.csv"), "average_timesdestroyed_csv");
        assert_eq!(slug("All  starsOnLevels.csv"), "all_starsonlevels_csv");
        assert_eq!(slug("--x--"), "x");
    }

    #[test]
    fn png_path_lives_in_output_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("charts");
        let renderer = PngRenderer::new(&out).unwrap();
        assert!(out.is_dir());

        let matrix = LevelMatrix::from_rows(vec![vec![Some(1), Some(2)]]).unwrap();
        let chart = average_chart(Metric::Stars, &matrix);
        assert_eq!(
            renderer.path_for(&chart),
            out.join("average_starsonlevels_csv.png")
        );
    }

    #[test]
    fn png_mode_writes_both_charts() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut renderer = PngRenderer::new(dir.path()).unwrap();

        let matrix = LevelMatrix::from_rows(vec![
            vec![Some(3), None, Some(5)],
            vec![Some(4), Some(2), Some(6)],
        ])
        .unwrap();
        render_metric(&mut renderer, Metric::Stars, &matrix).unwrap();

        // Nothing present: flat zero lines on a padded axis.
        let empty = LevelMatrix::from_rows(vec![vec![None, None], vec![None, None]]).unwrap();
        render_metric(&mut renderer, Metric::BestMoves, &empty).unwrap();

        for name in [
            "average_starsonlevels_csv.png",
            "all_starsonlevels_csv.png",
            "average_bestmovesonlevels_csv.png",
            "all_bestmovesonlevels_csv.png",
        ] {
            let meta = std::fs::metadata(dir.path().join(name)).unwrap();
            assert!(meta.len() > 0, "{name} is empty");
        }
    }

    #[test]
    fn metric_renders_average_then_overlay() {
        let matrix = LevelMatrix::from_rows(vec![vec![Some(1)], vec![None]]).unwrap();
        let mut rec = Recorder(Vec::new());
        render_metric(&mut rec, Metric::ResetPresses, &matrix).unwrap();
        assert_eq!(
            rec.0,
            vec![
                "Average timesResetPressed.csv".to_string(),
                "All timesResetPressed.csv".to_string(),
            ]
        );
    }
}
