//! End-to-end pipeline tests: write result files to disk the way the
//! data-collection tool lays them out, then load → select → summarize.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crossexp::{
    average_accuracy, load_table, median_correct_rt, select_condition, ConditionError,
    ExperimentRegistry,
};

fn write_group_file(root: &Path, group: &str, file_name: &str, contents: &str) {
    let dir = root.join(group);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file_name), contents).unwrap();
}

#[test]
fn exp2b_pipeline_from_disk() {
    let root = TempDir::new().unwrap();
    // Exp 2B layout: accuracy col 1, rt col 2, cue col 4 (valid=0,
    // neutral=1), reward col 5 (low=1, high=3).
    write_group_file(
        root.path(),
        "Exp 2B",
        "p01.csv",
        "subject,accuracy,rt,block,cue,reward\n\
         p01,1,412.0,1,0,3\n\
         p01,1,287.5,1,0,3\n\
         p01,0,365.1,1,0,3\n\
         p01,1,505.0,1,1,1\n",
    );

    let registry = ExperimentRegistry::builtin();
    let table = load_table(root.path().join("Exp 2B"), "p01.csv").unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.column_name(5), Some("reward"));

    // High reward, valid cue: the first three rows.
    let condition = select_condition(&table, &registry, "Exp 2B", 2, 1).unwrap();
    assert_eq!(condition.len(), 3);

    let accuracy = average_accuracy(&condition, &registry, "Exp 2B").unwrap();
    assert!((accuracy - 2.0 / 3.0).abs() < 1e-12);

    // Correct trials in the slice: RTs 412.0 and 287.5.
    let rt = median_correct_rt(&condition, &registry, "Exp 2B").unwrap();
    assert_eq!(rt, (287.5 + 412.0) / 2.0);
}

#[test]
fn exp1_files_load_headerless() {
    let root = TempDir::new().unwrap();
    // Exp 1A layout: accuracy col 1, cue col 4 (valid=1, neutral=0),
    // rt col 7, reward col 8 (low=1, high=3). No header row.
    write_group_file(
        root.path(),
        "Exp 1A",
        "p07.csv",
        "p07,1,0,0,1,0,0,351.7,1\n\
         p07,1,0,0,0,0,0,402.3,3\n",
    );

    let registry = ExperimentRegistry::builtin();
    let table = load_table(root.path().join("Exp 1A"), "p07.csv").unwrap();

    // The first data line is data, not a header.
    assert_eq!(table.len(), 2);
    assert_eq!(table.column_name(0), Some("column_1"));

    let low_valid = select_condition(&table, &registry, "Exp 1A", 1, 1).unwrap();
    assert_eq!(low_valid.len(), 1);
    let high_neutral = select_condition(&table, &registry, "Exp 1A", 2, 2).unwrap();
    assert_eq!(high_neutral.len(), 1);
    let high_valid = select_condition(&table, &registry, "Exp 1A", 2, 1).unwrap();
    assert!(high_valid.is_empty());
}

#[test]
fn condition_slices_partition_a_clean_file() {
    let root = TempDir::new().unwrap();
    // Every trial carries an in-range reward and cue code.
    let mut body = String::from("subject,accuracy,rt,block,cue,reward\n");
    for (cue, reward) in [(0, 1), (0, 3), (1, 1), (1, 3), (0, 3), (1, 1)] {
        body.push_str(&format!("p02,1,400.0,1,{cue},{reward}\n"));
    }
    write_group_file(root.path(), "Exp 2C", "p02.csv", &body);

    let registry = ExperimentRegistry::builtin();
    let table = load_table(root.path().join("Exp 2C"), "p02.csv").unwrap();
    let before = table.clone();

    let mut total = 0;
    for reward_level in 1..=2 {
        for cue_level in 1..=2 {
            let slice =
                select_condition(&table, &registry, "Exp 2C", reward_level, cue_level).unwrap();
            total += slice.len();
        }
    }
    assert_eq!(total, table.len());
    // Selection never mutates its input.
    assert_eq!(table, before);
}

#[test]
fn empty_condition_yields_nan_summaries() {
    let root = TempDir::new().unwrap();
    write_group_file(
        root.path(),
        "Exp 2D",
        "p03.csv",
        "subject,accuracy,rt,block,cue,reward\np03,1,400.0,1,0,2\n",
    );

    let registry = ExperimentRegistry::builtin();
    let table = load_table(root.path().join("Exp 2D"), "p03.csv").unwrap();

    // Low reward + neutral cue matches nothing in this file.
    let slice = select_condition(&table, &registry, "Exp 2D", 1, 2).unwrap();
    assert!(slice.is_empty());
    assert!(average_accuracy(&slice, &registry, "Exp 2D").unwrap().is_nan());
    assert!(median_correct_rt(&slice, &registry, "Exp 2D").unwrap().is_nan());
}

#[test]
fn unknown_experiment_fails_every_operation() {
    let root = TempDir::new().unwrap();
    write_group_file(
        root.path(),
        "Exp 2E",
        "p04.csv",
        "subject,accuracy,rt,block,cue,reward\np04,1,400.0,1,0,3\n",
    );

    let registry = ExperimentRegistry::builtin();
    let table = load_table(root.path().join("Exp 2E"), "p04.csv").unwrap();

    for result in [
        select_condition(&table, &registry, "Exp 99", 1, 1).map(|_| ()),
        average_accuracy(&table, &registry, "Exp 99").map(|_| ()),
        median_correct_rt(&table, &registry, "Exp 99").map(|_| ()),
    ] {
        assert!(matches!(
            result.unwrap_err(),
            ConditionError::UnknownExperiment(_)
        ));
    }
}
