use crate::config::ExperimentRegistry;
use crate::error::Result;

use super::model::TrialTable;

// ---------------------------------------------------------------------------
// Condition selection: reward level × cue validity
// ---------------------------------------------------------------------------

/// Select the sub-table of trials belonging to one experimental condition.
///
/// `reward_level` and `cue_level` are 1-based selectors into the code lists
/// of `experiment_id`'s config (reward: 1 = low, last = high; cue: 1 = valid,
/// 2 = neutral). A trial is kept only when its reward cell equals the
/// selected reward code AND its cue cell equals the selected cue code.
///
/// The result is a new table: original row order and every column preserved,
/// input untouched. An empty result means "no trials in this condition", not
/// an error.
pub fn select_condition(
    table: &TrialTable,
    registry: &ExperimentRegistry,
    experiment_id: &str,
    reward_level: usize,
    cue_level: usize,
) -> Result<TrialTable> {
    let config = registry.get(experiment_id)?;

    let reward_code = config.reward.code_for_level(reward_level)?;
    let cue_code = config.cue.code_for_level(cue_level)?;
    let reward_column = table.require_column(config.reward.column)?;
    let cue_column = table.require_column(config.cue.column)?;

    let rows: Vec<_> = table
        .rows
        .iter()
        .filter(|row| {
            row[reward_column].matches_code(reward_code) && row[cue_column].matches_code(cue_code)
        })
        .cloned()
        .collect();

    Ok(TrialTable::new(table.column_names.clone(), rows))
}
