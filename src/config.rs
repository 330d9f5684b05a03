//! Per-experiment lookup configuration.
//!
//! Each experiment names which columns of its result files carry the reward
//! and cue-validity codes, which integer codes mean what, and where the
//! accuracy / reaction-time measures live. The table is data, not logic: it
//! tracks the upstream data-collection tool's column order and is the one
//! place that breaks when a file format drifts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConditionError, Result};

// ---------------------------------------------------------------------------
// Per-experiment specs
// ---------------------------------------------------------------------------

/// Reward-magnitude coding: which column, and the ordered condition codes
/// (low first, then medium where present, then high).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardSpec {
    /// 0-based column position in the result file.
    pub column: usize,
    /// Ordered codes; two or three entries depending on the experiment.
    pub codes: Vec<i64>,
}

/// Cue-validity coding: which column, and the ordered condition codes
/// (valid first, then neutral).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueSpec {
    /// 0-based column position in the result file.
    pub column: usize,
    /// Ordered codes; valid cue first.
    pub codes: Vec<i64>,
}

/// Where the dependent measures live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureSpec {
    /// 0-based position of the 0/1-coded accuracy column.
    pub accuracy_column: usize,
    /// 0-based position of the reaction-time column.
    pub rt_column: usize,
}

/// Complete lookup record for one experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub reward: RewardSpec,
    pub cue: CueSpec,
    pub measures: MeasureSpec,
}

/// Resolve a 1-based level selector against an ordered code list.
fn code_for_level(codes: &[i64], level: usize, selector: &'static str) -> Result<i64> {
    if level == 0 || level > codes.len() {
        return Err(ConditionError::LevelOutOfRange {
            selector,
            level,
            available: codes.len(),
        });
    }
    Ok(codes[level - 1])
}

impl RewardSpec {
    /// Code for a 1-based reward level (1 = low, last = high).
    pub fn code_for_level(&self, level: usize) -> Result<i64> {
        code_for_level(&self.codes, level, "reward")
    }
}

impl CueSpec {
    /// Code for a 1-based cue level (1 = valid, 2 = neutral).
    pub fn code_for_level(&self, level: usize) -> Result<i64> {
        code_for_level(&self.codes, level, "cue")
    }
}

// ---------------------------------------------------------------------------
// ExperimentRegistry – id → config
// ---------------------------------------------------------------------------

/// All known experiments, keyed by their full id (`"Exp 2B"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentRegistry {
    experiments: BTreeMap<String, ExperimentConfig>,
}

impl ExperimentRegistry {
    /// The hand-authored table for the current dataset.
    pub fn builtin() -> Self {
        fn entry(
            reward_column: usize,
            reward_codes: &[i64],
            cue_column: usize,
            cue_codes: &[i64],
            accuracy_column: usize,
            rt_column: usize,
        ) -> ExperimentConfig {
            ExperimentConfig {
                reward: RewardSpec {
                    column: reward_column,
                    codes: reward_codes.to_vec(),
                },
                cue: CueSpec {
                    column: cue_column,
                    codes: cue_codes.to_vec(),
                },
                measures: MeasureSpec {
                    accuracy_column,
                    rt_column,
                },
            }
        }

        let mut experiments = BTreeMap::new();
        // Exp 1 files: reward in column 9 (low=1, high=3), cue in column 5
        // (valid=1, neutral=0), RT in column 8.
        experiments.insert("Exp 1A".to_string(), entry(8, &[1, 3], 4, &[1, 0], 1, 7));
        experiments.insert("Exp 1B".to_string(), entry(8, &[1, 3], 4, &[1, 0], 1, 7));
        // Exp 2 onwards flip the cue coding (valid=0, neutral=1) and move
        // RT next to accuracy.
        experiments.insert("Exp 2A".to_string(), entry(4, &[1, 2], 4, &[0, 1], 1, 2));
        experiments.insert("Exp 2B".to_string(), entry(5, &[1, 3], 4, &[0, 1], 1, 2));
        experiments.insert("Exp 2C".to_string(), entry(5, &[1, 3], 4, &[0, 1], 1, 2));
        experiments.insert("Exp 2D".to_string(), entry(5, &[1, 2], 4, &[0, 1], 1, 2));
        experiments.insert("Exp 2E".to_string(), entry(5, &[1, 3], 4, &[0, 1], 1, 2));
        experiments.insert("Exp 3".to_string(), entry(5, &[1, 3], 3, &[0, 1], 1, 2));

        ExperimentRegistry { experiments }
    }

    /// Parse a registry from a JSON object mapping experiment ids to
    /// configs, then validate it.
    ///
    /// ```json
    /// {
    ///   "Exp 2B": {
    ///     "reward":   { "column": 5, "codes": [1, 3] },
    ///     "cue":      { "column": 4, "codes": [0, 1] },
    ///     "measures": { "accuracy_column": 1, "rt_column": 2 }
    ///   }
    /// }
    /// ```
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let registry: ExperimentRegistry = serde_json::from_str(json)?;
        registry.validate()?;
        log::debug!("experiment registry loaded: {} entries", registry.len());
        Ok(registry)
    }

    /// Check every entry holds a usable number of condition codes.
    pub fn validate(&self) -> Result<()> {
        if self.experiments.is_empty() {
            return Err(ConditionError::InvalidConfig {
                id: "<registry>".to_string(),
                reason: "no experiments defined".to_string(),
            });
        }
        for (id, config) in &self.experiments {
            for (name, codes) in [("reward", &config.reward.codes), ("cue", &config.cue.codes)] {
                if !(2..=3).contains(&codes.len()) {
                    return Err(ConditionError::InvalidConfig {
                        id: id.clone(),
                        reason: format!(
                            "{name} codes must hold 2 or 3 entries, got {}",
                            codes.len()
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Look up an experiment's config, failing for unknown ids.
    pub fn get(&self, experiment_id: &str) -> Result<&ExperimentConfig> {
        self.experiments
            .get(experiment_id)
            .ok_or_else(|| ConditionError::UnknownExperiment(experiment_id.to_string()))
    }

    /// All experiment ids, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.experiments.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_all_experiments() {
        let registry = ExperimentRegistry::builtin();
        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(
            ids,
            vec![
                "Exp 1A", "Exp 1B", "Exp 2A", "Exp 2B", "Exp 2C", "Exp 2D", "Exp 2E", "Exp 3"
            ]
        );
        registry.validate().unwrap();
    }

    #[test]
    fn test_unknown_experiment() {
        let registry = ExperimentRegistry::builtin();
        let err = registry.get("Exp 9Z").unwrap_err();
        assert!(matches!(err, ConditionError::UnknownExperiment(id) if id == "Exp 9Z"));
    }

    #[test]
    fn test_level_selection() {
        let registry = ExperimentRegistry::builtin();
        let config = registry.get("Exp 2B").unwrap();
        assert_eq!(config.reward.code_for_level(1).unwrap(), 1); // low
        assert_eq!(config.reward.code_for_level(2).unwrap(), 3); // high
        assert_eq!(config.cue.code_for_level(1).unwrap(), 0); // valid
        assert_eq!(config.cue.code_for_level(2).unwrap(), 1); // neutral
    }

    #[test]
    fn test_level_out_of_range_is_fatal() {
        let registry = ExperimentRegistry::builtin();
        let config = registry.get("Exp 1A").unwrap();
        for bad in [0, 3, 99] {
            let err = config.reward.code_for_level(bad).unwrap_err();
            assert!(matches!(
                err,
                ConditionError::LevelOutOfRange {
                    selector: "reward",
                    available: 2,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_json_round_trip() {
        let builtin = ExperimentRegistry::builtin();
        let json = serde_json::to_string(&builtin).unwrap();
        let reloaded = ExperimentRegistry::from_json_str(&json).unwrap();
        assert_eq!(builtin, reloaded);
    }

    #[test]
    fn test_json_rejects_bad_code_count() {
        let json = r#"{
            "Exp X": {
                "reward":   { "column": 5, "codes": [1] },
                "cue":      { "column": 4, "codes": [0, 1] },
                "measures": { "accuracy_column": 1, "rt_column": 2 }
            }
        }"#;
        assert!(ExperimentRegistry::from_json_str(json).is_err());
    }
}
