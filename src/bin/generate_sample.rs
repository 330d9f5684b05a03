//! Write one plausible result file per experiment layout, so the loader and
//! condition filters can be exercised end to end without real participant
//! data. Usage: `generate_sample [output_dir]` (default `sample_data/`).

use std::path::Path;

use anyhow::{Context, Result};

use crossexp::{group_has_header, ExperimentRegistry};

const TRIALS_PER_FILE: usize = 48;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick(&mut self, choices: &[i64]) -> i64 {
        choices[(self.next_u64() % choices.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "sample_data".to_string());
    let registry = ExperimentRegistry::builtin();
    let mut rng = SimpleRng::new(42);

    for id in registry.ids() {
        let config = registry.get(id)?;
        let group_dir = Path::new(&out_dir).join(id);
        std::fs::create_dir_all(&group_dir)
            .with_context(|| format!("creating {}", group_dir.display()))?;

        let path = group_dir.join("p01.csv");
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;

        // Table wide enough for every configured position.
        let width = 1 + [
            config.reward.column,
            config.cue.column,
            config.measures.accuracy_column,
            config.measures.rt_column,
        ]
        .into_iter()
        .max()
        .unwrap_or(0);

        if group_has_header(id) {
            let mut names: Vec<String> = (1..=width).map(|i| format!("c{i}")).collect();
            names[0] = "subject".to_string();
            names[config.measures.accuracy_column] = "accuracy".to_string();
            names[config.measures.rt_column] = "rt".to_string();
            names[config.reward.column] = "reward".to_string();
            names[config.cue.column] = "cue".to_string();
            writer.write_record(&names)?;
        }

        for _ in 0..TRIALS_PER_FILE {
            let accuracy: i64 = if rng.next_f64() < 0.85 { 1 } else { 0 };
            let rt = rng.gauss(420.0, 75.0).max(150.0);
            let reward = rng.pick(&config.reward.codes);
            let cue = rng.pick(&config.cue.codes);

            let mut record: Vec<String> = vec!["0".to_string(); width];
            record[0] = "p01".to_string();
            record[config.measures.accuracy_column] = accuracy.to_string();
            record[config.measures.rt_column] = format!("{rt:.1}");
            record[config.reward.column] = reward.to_string();
            record[config.cue.column] = cue.to_string();
            writer.write_record(&record)?;
        }
        writer.flush()?;
        log::info!("wrote {} ({TRIALS_PER_FILE} trials)", path.display());
    }

    Ok(())
}
