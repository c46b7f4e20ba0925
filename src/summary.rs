use anyhow::Result;
use serde::Serialize;

use crate::data::metric::Metric;
use crate::data::model::LevelMatrix;
use crate::data::stats::level_averages;

/// Machine-readable digest of one metric, printed with `--summary`.
#[derive(Debug, Serialize)]
pub struct MetricSummary {
    pub metric: &'static str,
    pub players: usize,
    pub levels: usize,
    pub averages: Vec<f64>,
}

impl MetricSummary {
    pub fn new(metric: Metric, matrix: &LevelMatrix) -> Self {
        Self {
            metric: metric.file_name(),
            players: matrix.num_players(),
            levels: matrix.num_levels(),
            averages: level_averages(matrix),
        }
    }

    /// Single-line JSON, one object per metric.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
