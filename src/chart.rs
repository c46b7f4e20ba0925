use crate::data::metric::Metric;
use crate::data::model::LevelMatrix;
use crate::data::stats::{all_safe_values, level_averages};

// ---------------------------------------------------------------------------
// Backend-independent chart description
// ---------------------------------------------------------------------------

/// One line on a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One line: the per-level average across players.
    Average,
    /// One line per player.
    Overlay,
}

/// What a renderer draws: a titled set of line series over level indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    /// Players behind the chart, whatever the number of series.
    pub players: usize,
    pub levels: usize,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Chart {
    /// Axis extents covering every point, padded so flat or empty charts
    /// still get a usable range. Returns `([x_min, x_max], [y_min, y_max])`.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let mut x = [0.0f64, 1.0f64];
        let mut y = [0.0f64, 0.0f64];

        for p in self.series.iter().flat_map(|s| s.points.iter()) {
            x[1] = x[1].max(p[0]);
            y[0] = y[0].min(p[1]);
            y[1] = y[1].max(p[1]);
        }

        let span = y[1] - y[0];
        if span.abs() < f64::EPSILON {
            y[1] = y[0] + 1.0;
        } else {
            y[1] += span * 0.05;
        }
        (x, y)
    }
}

/// Average across players for each level of `metric`.
pub fn average_chart(metric: Metric, matrix: &LevelMatrix) -> Chart {
    let points = level_averages(matrix)
        .into_iter()
        .enumerate()
        .map(|(level, avg)| [level as f64, avg])
        .collect();

    Chart {
        kind: ChartKind::Average,
        title: format!("Average {metric}"),
        players: matrix.num_players(),
        levels: matrix.num_levels(),
        x_label: "Level".to_string(),
        y_label: format!("Average {}", metric.stem()),
        series: vec![Series {
            name: "average".to_string(),
            points,
        }],
    }
}

/// Every player's zero-filled values for `metric`, one line per player.
///
/// The per-level lists form a levels × players table; each column of that
/// table is one player's line.
pub fn overlay_chart(metric: Metric, matrix: &LevelMatrix) -> Chart {
    let per_level = all_safe_values(matrix);

    let series = (0..matrix.num_players())
        .map(|player| Series {
            name: format!("player {player}"),
            points: per_level
                .iter()
                .enumerate()
                .map(|(level, values)| [level as f64, values[player] as f64])
                .collect(),
        })
        .collect();

    Chart {
        kind: ChartKind::Overlay,
        title: format!("All {metric}"),
        players: matrix.num_players(),
        levels: matrix.num_levels(),
        x_label: "Level".to_string(),
        y_label: metric.stem().to_string(),
        series,
    }
}
