//! Reorganize behavioral-experiment trial data for cross-experiment
//! analysis.
//!
//! Each experiment's result files encode reward magnitude and cue validity
//! as integer codes in experiment-specific columns. This crate keeps that
//! knowledge in one typed registry ([`ExperimentRegistry`]), loads result
//! files into immutable in-memory tables, slices them by condition, and
//! computes the two dependent measures the analyses need:
//!
//! ```no_run
//! use crossexp::{load_table, select_condition, average_accuracy, median_correct_rt};
//! use crossexp::ExperimentRegistry;
//!
//! # fn main() -> anyhow::Result<()> {
//! let registry = ExperimentRegistry::builtin();
//! let table = load_table("Exp 2B", "p01.csv")?;
//!
//! // High reward, valid cue.
//! let condition = select_condition(&table, &registry, "Exp 2B", 2, 1)?;
//! let accuracy = average_accuracy(&condition, &registry, "Exp 2B")?;
//! let rt = median_correct_rt(&condition, &registry, "Exp 2B")?;
//! println!("acc {accuracy:.3}, median RT {rt:.1} ms");
//! # Ok(())
//! # }
//! ```
//!
//! All operations are pure functions over an immutable table and a fixed
//! registry; an empty condition slice yields `NaN` summaries rather than an
//! error.

pub mod config;
pub mod data;
pub mod error;

pub use config::{CueSpec, ExperimentConfig, ExperimentRegistry, MeasureSpec, RewardSpec};
pub use data::filter::select_condition;
pub use data::loader::{group_has_header, load_table, read_table};
pub use data::model::{CellValue, TrialTable};
pub use data::summary::{average_accuracy, median_correct_rt};
pub use error::ConditionError;
