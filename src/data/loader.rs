use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{debug, info};

use super::metric::Metric;
use super::model::{Cell, LevelMatrix, parse_cell};

/// First-cell values marking bookkeeping rows rather than players.
pub const SENTINELS: [&str; 2] = ["unique", "levelOrdinals"];

pub fn is_sentinel(first_cell: &str) -> bool {
    SENTINELS.contains(&first_cell)
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load one metric for every prefix and concatenate the players in prefix
/// order.
pub fn load_metric<S: AsRef<str>>(metric: Metric, prefixes: &[S]) -> Result<LevelMatrix> {
    let mut rows = Vec::new();

    for prefix in prefixes {
        let path = metric.path_for(prefix.as_ref());
        let mut file_rows = read_player_rows(&path)?;
        rows.append(&mut file_rows);
    }

    let matrix = LevelMatrix::from_rows(rows)
        .with_context(|| format!("aggregating {metric} across {} file(s)", prefixes.len()))?;

    info!(
        "{metric}: {} players, {} levels",
        matrix.num_players(),
        matrix.num_levels()
    );
    Ok(matrix)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: no header contract. Column 0 identifies the row; rows whose
/// identifier is a sentinel are skipped. Remaining columns hold one integer
/// (or nothing) per level. A blank line is a malformed row and fails the read.
///
/// ```text
/// levelOrdinals,1,2,3
/// 5f1c...,12,,30
/// 77ab...,9,14,22
/// ```
pub fn read_player_rows(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let raw = fs::read(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_slice());

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut record = csv::StringRecord::new();
    let mut record_no = 0usize;

    loop {
        // The csv reader drops blank lines silently, so look at the line
        // breaks it is about to skip before every read.
        let from = reader.position().byte() as usize;
        if let Some(line) = blank_line(&raw, from, record_no > 0) {
            bail!("{}: line {line} is empty", path.display());
        }

        let more = reader
            .read_record(&mut record)
            .with_context(|| format!("{}: CSV record {record_no}", path.display()))?;
        if !more {
            break;
        }
        let this_record = record_no;
        record_no += 1;

        let id = record.get(0).unwrap_or_default();
        if is_sentinel(id) {
            skipped += 1;
            continue;
        }

        let cells = record
            .iter()
            .skip(1)
            .enumerate()
            .map(|(level, value)| {
                parse_cell(value).with_context(|| {
                    format!("{}: record {this_record} ({id}), level {level}", path.display())
                })
            })
            .collect::<Result<Vec<Cell>>>()?;

        rows.push(cells);
    }

    debug!(
        "read {}: {} player rows, {skipped} sentinel rows skipped",
        path.display(),
        rows.len()
    );
    Ok(rows)
}

fn is_line_break(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// 1-based number of the first empty line in the run of line breaks at
/// `from`. After a record, the run also holds that record's own terminator,
/// which may be partly consumed already; it starts one byte back then.
fn blank_line(raw: &[u8], from: usize, after_record: bool) -> Option<usize> {
    let mut start = from;
    if after_record {
        start = from.saturating_sub(1);
        if !raw.get(start).copied().is_some_and(is_line_break) {
            start += 1;
        }
    }
    let allowed = usize::from(after_record);

    let extra = raw
        .get(start..)?
        .iter()
        .take_while(|b| is_line_break(**b))
        .enumerate()
        .filter(|(_, b)| **b == b'\n')
        .map(|(i, _)| start + i)
        .nth(allowed)?;
    Some(raw[..extra].iter().filter(|b| **b == b'\n').count() + 1)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn sentinels_are_exact_matches() {
        assert!(is_sentinel("unique"));
        assert!(is_sentinel("levelOrdinals"));
        assert!(!is_sentinel("Unique"));
        assert!(!is_sentinel("levelOrdinals "));
        assert!(!is_sentinel("player-1"));
    }

    #[test]
    fn skips_sentinels_and_identifier_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stars.csv");
        fs::write(
            &path,
            "levelOrdinals,1,2,3\np1,3,,5\nunique,2\np2,4,2,6\n",
        )
        .unwrap();

        let rows = read_player_rows(&path).unwrap();
        assert_eq!(
            rows,
            vec![
                vec![Some(3), None, Some(5)],
                vec![Some(4), Some(2), Some(6)],
            ]
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");
        let err = read_player_rows(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.csv"));
    }

    #[test]
    fn blank_line_between_rows_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resets.csv");
        fs::write(&path, "p1,1,2\n\np2,3,4\n").unwrap();

        let msg = format!("{:#}", read_player_rows(&path).unwrap_err());
        assert!(msg.contains("resets.csv: line 2 is empty"), "{msg}");
    }

    #[test]
    fn leading_and_trailing_blank_lines_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("undo.csv");

        fs::write(&path, "\np1,1,2\n").unwrap();
        let msg = format!("{:#}", read_player_rows(&path).unwrap_err());
        assert!(msg.contains("line 1 is empty"), "{msg}");

        fs::write(&path, "p1,1,2\np2,3,4\n\n").unwrap();
        let msg = format!("{:#}", read_player_rows(&path).unwrap_err());
        assert!(msg.contains("line 3 is empty"), "{msg}");
    }

    #[test]
    fn line_endings_alone_are_not_blank_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("moves.csv");

        fs::write(&path, "p1,1,2\r\np2,3,\r\n").unwrap();
        assert_eq!(
            read_player_rows(&path).unwrap(),
            vec![vec![Some(1), Some(2)], vec![Some(3), None]]
        );

        fs::write(&path, "p1,1,2\np2,3,4").unwrap();
        assert_eq!(read_player_rows(&path).unwrap().len(), 2);
    }

    #[test]
    fn bad_value_names_record_and_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("times.csv");
        fs::write(&path, "p1,1,2\np2,3,x\n").unwrap();

        let msg = format!("{:#}", read_player_rows(&path).unwrap_err());
        assert!(msg.contains("record 1 (p2), level 1"), "{msg}");
        assert!(msg.contains("'x' is not an integer"), "{msg}");
    }
}
