//! Report persistence end to end: trial → directory → read back → replay.

use quarterturn_harness::config::TrialConfig;
use quarterturn_harness::report_dir::{read_report_dir, write_report_dir, REPORT_FILENAME};
use quarterturn_harness::runner::run_trial;
use quarterturn_kernel::proof::replay::ReplayVerdict;
use quarterturn_search::policy::Algorithm;

fn trial(algorithm: Algorithm) -> quarterturn_harness::runner::TrialOutcomeV1 {
    run_trial(&TrialConfig {
        scramble_depth: Some(4),
        seed: Some(2024),
        algorithm: Some(algorithm),
        ..TrialConfig::default()
    })
    .unwrap()
}

#[test]
fn persisted_report_reads_back_and_replays() {
    let outcome = trial(Algorithm::IdaStar);
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&outcome.report, dir.path()).unwrap();

    let loaded = read_report_dir(dir.path()).unwrap();
    assert_eq!(loaded.digest(), outcome.report.digest());
    assert_eq!(loaded.replay().unwrap(), ReplayVerdict::Solved);

    let value: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join(REPORT_FILENAME)).unwrap())
            .unwrap();
    assert_eq!(value["algorithm"], "ida*");
    assert_eq!(value["scramble"]["seed"], 2024);
}

#[test]
fn algorithms_share_scramble_but_not_digest() {
    let bfs = trial(Algorithm::Bfs);
    let ida = trial(Algorithm::IdaStar);
    assert_eq!(bfs.scramble, ida.scramble);
    assert_eq!(bfs.result.moves.len(), ida.result.moves.len());
    assert_ne!(bfs.report.digest(), ida.report.digest());
}
