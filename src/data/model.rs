use thiserror::Error;

// ---------------------------------------------------------------------------
// Cell – one player's value on one level
// ---------------------------------------------------------------------------

/// A parsed CSV cell. `None` is an empty cell: the player has no value for
/// that level.
pub type Cell = Option<i64>;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{value}' is not an integer")]
pub struct CellError {
    pub value: String,
}

/// Parse one level cell. Only the empty string counts as missing.
pub fn parse_cell(raw: &str) -> Result<Cell, CellError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|_| CellError {
            value: raw.to_string(),
        })
}

// ---------------------------------------------------------------------------
// LevelMatrix – players × levels for one metric
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    #[error("no player rows found")]
    NoPlayers,

    #[error("player row {row} has {found} level values, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular table of one metric: one row per player, one column per level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelMatrix {
    rows: Vec<Vec<Cell>>,
    num_levels: usize,
}

impl LevelMatrix {
    /// Build the matrix, taking the level count from the first row and
    /// rejecting any row that disagrees with it.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MatrixError> {
        let num_levels = rows.first().ok_or(MatrixError::NoPlayers)?.len();

        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != num_levels)
        {
            return Err(MatrixError::Ragged {
                row,
                expected: num_levels,
                found: cells.len(),
            });
        }

        Ok(LevelMatrix { rows, num_levels })
    }

    pub fn num_players(&self) -> usize {
        self.rows.len()
    }

    pub fn num_levels(&self) -> usize {
        self.num_levels
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, player: usize, level: usize) -> Option<Cell> {
        self.rows.get(player)?.get(level).copied()
    }

    /// Every player's cell for one level, in player order.
    ///
    /// # Panics
    /// If `level >= self.num_levels()`.
    pub fn level_cells(&self, level: usize) -> impl Iterator<Item = Cell> + '_ {
        assert!(
            level < self.num_levels,
            "level {level} out of range for {} levels",
            self.num_levels
        );
        self.rows.iter().map(move |row| row[level])
    }
}
