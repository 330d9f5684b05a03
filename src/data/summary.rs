use crate::config::ExperimentRegistry;
use crate::error::Result;

use super::model::TrialTable;

// ---------------------------------------------------------------------------
// Accuracy
// ---------------------------------------------------------------------------

/// Mean accuracy over trials whose accuracy cell is exactly 0 or 1.
///
/// Other codes (timeouts, aborted trials, missing fields) are excluded from
/// both numerator and denominator rather than treated as errors. When no
/// trial survives the 0/1 filter the result is `NaN` — the floating-point
/// "mean of an empty set", a deliberate no-data signal distinct from a
/// failure.
pub fn average_accuracy(
    table: &TrialTable,
    registry: &ExperimentRegistry,
    experiment_id: &str,
) -> Result<f64> {
    let config = registry.get(experiment_id)?;
    let accuracy_column = table.require_column(config.measures.accuracy_column)?;

    let mut sum = 0.0;
    let mut count = 0usize;
    for value in table.column_values(accuracy_column) {
        match value.as_f64() {
            Some(v) if v == 0.0 || v == 1.0 => {
                sum += v;
                count += 1;
            }
            _ => {}
        }
    }

    if count == 0 {
        return Ok(f64::NAN);
    }
    Ok(sum / count as f64)
}

// ---------------------------------------------------------------------------
// Reaction time
// ---------------------------------------------------------------------------

/// Median reaction time over correct trials (accuracy exactly 1).
///
/// Stricter than [`average_accuracy`]: incorrect trials contribute nothing
/// here, not even to the denominator. Non-numeric reaction times in correct
/// rows are skipped. Empty set → `NaN`, as above.
pub fn median_correct_rt(
    table: &TrialTable,
    registry: &ExperimentRegistry,
    experiment_id: &str,
) -> Result<f64> {
    let config = registry.get(experiment_id)?;
    let accuracy_column = table.require_column(config.measures.accuracy_column)?;
    let rt_column = table.require_column(config.measures.rt_column)?;

    let mut times: Vec<f64> = table
        .rows
        .iter()
        .filter(|row| row[accuracy_column].matches_code(1))
        .filter_map(|row| row[rt_column].as_f64())
        .collect();

    Ok(median(&mut times))
}

/// Median of a slice; `NaN` when empty, midpoint of the two central values
/// for even counts.
fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}
