use super::model::{Cell, LevelMatrix};

// ---------------------------------------------------------------------------
// Averaging: missing cells are left out entirely
// ---------------------------------------------------------------------------

/// Mean of the present values. Missing cells count toward neither the sum
/// nor the count; with nothing present the mean is `0.0`.
pub fn average<I>(cells: I) -> f64
where
    I: IntoIterator<Item = Cell>,
{
    let (sum, count) = cells
        .into_iter()
        .flatten()
        .fold((0i128, 0usize), |(sum, count), v| (sum + v as i128, count + 1));

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Average of one level across all players.
pub fn level_average(matrix: &LevelMatrix, level: usize) -> f64 {
    average(matrix.level_cells(level))
}

/// One average per level, in level order.
pub fn level_averages(matrix: &LevelMatrix) -> Vec<f64> {
    (0..matrix.num_levels())
        .map(|level| level_average(matrix, level))
        .collect()
}

// ---------------------------------------------------------------------------
// Safe values: missing cells become zero
// ---------------------------------------------------------------------------

/// Every player's value on one level, with `0` for missing cells.
/// Always `num_players` entries long.
pub fn level_safe_values(matrix: &LevelMatrix, level: usize) -> Vec<i64> {
    matrix
        .level_cells(level)
        .map(|cell| cell.unwrap_or(0))
        .collect()
}

/// [`level_safe_values`] for every level, in level order.
pub fn all_safe_values(matrix: &LevelMatrix) -> Vec<Vec<i64>> {
    (0..matrix.num_levels())
        .map(|level| level_safe_values(matrix, level))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LevelMatrix {
        LevelMatrix::from_rows(vec![
            vec![Some(3), None, Some(5)],
            vec![Some(4), Some(2), Some(6)],
        ])
        .unwrap()
    }

    #[test]
    fn averages_skip_missing_cells() {
        assert_eq!(level_averages(&sample()), vec![3.5, 2.0, 5.5]);
    }

    #[test]
    fn all_missing_level_averages_to_zero() {
        let m = LevelMatrix::from_rows(vec![vec![None, Some(7)], vec![None, None]]).unwrap();
        assert_eq!(level_average(&m, 0), 0.0);
        assert_eq!(level_average(&m, 1), 7.0);
        assert_eq!(average(Vec::new()), 0.0);
    }

    #[test]
    fn average_is_float_division() {
        assert_eq!(average([Some(1), Some(2)]), 1.5);
        assert_eq!(average([Some(1), Some(1), Some(2)]), 4.0 / 3.0);
        assert_eq!(average([Some(-4), None, Some(2)]), -1.0);
    }

    #[test]
    fn safe_values_fill_zero_per_player() {
        let m = sample();
        assert_eq!(
            all_safe_values(&m),
            vec![vec![3, 4], vec![0, 2], vec![5, 6]]
        );
        for level in 0..m.num_levels() {
            assert_eq!(level_safe_values(&m, level).len(), m.num_players());
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn level_past_the_end_panics() {
        level_average(&sample(), 3);
    }
}
