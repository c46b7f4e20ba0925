use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Metric – one tracked statistic, stored as one CSV file per session
// ---------------------------------------------------------------------------

/// The fixed set of per-level statistics exported by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    BestMoves,
    TimesDestroyed,
    TimeToFirstSolve,
    FirstMoves,
    UndoPresses,
    Stars,
    ResetPresses,
    TotalLevelTime,
}

impl Metric {
    /// Processing order used for every run.
    pub const ALL: [Metric; 8] = [
        Metric::BestMoves,
        Metric::TimesDestroyed,
        Metric::TimeToFirstSolve,
        Metric::FirstMoves,
        Metric::UndoPresses,
        Metric::Stars,
        Metric::ResetPresses,
        Metric::TotalLevelTime,
    ];

    /// File name appended to every prefix.
    pub fn file_name(self) -> &'static str {
        match self {
            Metric::BestMoves => "bestMovesOnLevels.csv",
            Metric::TimesDestroyed => "timesDestroyed.csv",
            Metric::TimeToFirstSolve => "timesToFirstSolve.csv",
            Metric::FirstMoves => "firstMovesOnLevels.csv",
            Metric::UndoPresses => "timesUndoPressed.csv",
            Metric::Stars => "starsOnLevels.csv",
            Metric::ResetPresses => "timesResetPressed.csv",
            Metric::TotalLevelTime => "totalLevelTimes.csv",
        }
    }

    /// File name without the `.csv` extension.
    pub fn stem(self) -> &'static str {
        let name = self.file_name();
        name.strip_suffix(".csv").unwrap_or(name)
    }

    /// Input path for one prefix. The prefix is concatenated verbatim, so
    /// `runs/` and `runs/session1_` both work.
    pub fn path_for(self, prefix: &str) -> PathBuf {
        PathBuf::from(format!("{prefix}{}", self.file_name()))
    }

    /// Reduce a user selection to the fixed processing order, without
    /// duplicates. An empty selection means every metric.
    pub fn select(requested: &[Metric]) -> Vec<Metric> {
        if requested.is_empty() {
            return Self::ALL.to_vec();
        }
        Self::ALL
            .into_iter()
            .filter(|m| requested.contains(m))
            .collect()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown metric '{0}' (expected a file name such as timesDestroyed.csv or its stem)")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.file_name() == s || m.stem() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}
