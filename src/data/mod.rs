/// Data layer: metric names, CSV loading, the level matrix and its statistics.
///
/// Architecture:
/// ```text
///  <prefix><metric>.csv  (one per prefix)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  drop sentinel rows + id column, parse cells
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ LevelMatrix  │  players × levels of Option<i64>
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  per-level averages, zero-filled player values
///   └──────────┘
/// ```

pub mod loader;
pub mod metric;
pub mod model;
pub mod sample;
pub mod stats;
