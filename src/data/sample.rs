use std::path::PathBuf;

use anyhow::{Context, Result};

use super::metric::Metric;

/// Shape of a generated sample session.
#[derive(Debug, Clone, Copy)]
pub struct SampleSpec {
    pub players: usize,
    pub levels: usize,
    /// Probability that a player never reached a level (empty cell).
    pub skip_rate: f64,
    pub seed: u64,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            players: 12,
            levels: 20,
            skip_rate: 0.15,
            seed: 42,
        }
    }
}

/// Write one CSV per metric under `prefix`, in the layout the loader reads:
/// a `levelOrdinals` row, then one row per player. Returns the written paths.
pub fn write_sample_session(prefix: &str, spec: &SampleSpec) -> Result<Vec<PathBuf>> {
    let mut rng = SimpleRng::new(spec.seed);
    let mut written = Vec::with_capacity(Metric::ALL.len());

    for metric in Metric::ALL {
        let path = metric.path_for(prefix);
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;

        let mut header = vec!["levelOrdinals".to_string()];
        header.extend((1..=spec.levels).map(|l| l.to_string()));
        writer.write_record(&header)?;

        for player in 0..spec.players {
            let mut row = vec![format!("player-{player:03}")];
            for level in 0..spec.levels {
                // Later levels are reached by fewer players.
                let reach_penalty = level as f64 / spec.levels.max(1) as f64 * 0.2;
                if rng.next_f64() < spec.skip_rate + reach_penalty {
                    row.push(String::new());
                } else {
                    row.push(sample_value(metric, level, &mut rng).to_string());
                }
            }
            writer.write_record(&row)?;
        }

        writer
            .flush()
            .with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

/// A plausible value for one metric, growing with level difficulty.
fn sample_value(metric: Metric, level: usize, rng: &mut SimpleRng) -> i64 {
    let difficulty = 1.0 + level as f64 * 0.35;
    let v = match metric {
        Metric::BestMoves => 4.0 + difficulty * 2.0 + rng.gauss(0.0, 1.5),
        Metric::FirstMoves => 6.0 + difficulty * 3.0 + rng.gauss(0.0, 3.0),
        Metric::TimesDestroyed => difficulty * rng.next_f64() * 2.0,
        Metric::TimeToFirstSolve => 20.0 + difficulty * 15.0 + rng.gauss(0.0, 10.0),
        Metric::UndoPresses | Metric::ResetPresses => difficulty * rng.next_f64() * 3.0,
        Metric::Stars => 1.0 + rng.next_f64() * 3.0,
        Metric::TotalLevelTime => 30.0 + difficulty * 25.0 + rng.gauss(0.0, 15.0),
    };
    match metric {
        Metric::Stars => (v as i64).clamp(1, 3),
        _ => v.round().max(0.0) as i64,
    }
}

/// SplitMix64: tiny, seedable and good enough for fixture data.
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Approximately normal: twelve uniforms summed, minus their mean.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = (0..12).map(|_| self.next_f64()).sum::<f64>() - 6.0;
        mean + std_dev * z
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::data::loader::load_metric;

    #[test]
    fn generated_session_loads_with_requested_shape() {
        let dir = TempDir::new().unwrap();
        let prefix = format!("{}/s1_", dir.path().display());
        let spec = SampleSpec {
            players: 5,
            levels: 7,
            ..SampleSpec::default()
        };

        let paths = write_sample_session(&prefix, &spec).unwrap();
        assert_eq!(paths.len(), Metric::ALL.len());

        for metric in Metric::ALL {
            let matrix = load_metric(metric, &[prefix.as_str()]).unwrap();
            assert_eq!(matrix.num_players(), 5);
            assert_eq!(matrix.num_levels(), 7);
        }
    }

    #[test]
    fn same_seed_same_values() {
        let mut a = SimpleRng::new(9);
        let mut b = SimpleRng::new(9);
        let xs: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
        assert_eq!(xs, ys);
        assert!((0..100).all(|_| (0.0..1.0).contains(&a.next_f64())));
    }

    #[test]
    fn stars_stay_in_range() {
        let mut rng = SimpleRng::new(7);
        for level in 0..50 {
            let v = sample_value(Metric::Stars, level, &mut rng);
            assert!((1..=3).contains(&v));
        }
    }
}
