//! Binary that runs one seeded trial and prints deterministic output lines
//! for cross-process verification.
//!
//! Usage: `solve_fixture <seed> <scramble_depth> [algorithm]`
//!
//! Output: key=value lines, one per field, in a fixed order. Diagnostics go
//! to stderr via `RUST_LOG`.

use std::process::ExitCode;

use quarterturn_harness::config::TrialConfig;
use quarterturn_harness::logging;
use quarterturn_harness::runner::run_trial;
use quarterturn_kernel::operators::moves::format_moves;
use quarterturn_search::policy::Algorithm;

fn parse_args(args: &[String]) -> Result<TrialConfig, String> {
    let [seed, depth, rest @ ..] = args else {
        return Err("usage: solve_fixture <seed> <scramble_depth> [algorithm]".into());
    };
    let seed: u64 = seed.parse().map_err(|e| format!("seed {seed:?}: {e}"))?;
    let depth: usize = depth.parse().map_err(|e| format!("depth {depth:?}: {e}"))?;
    let algorithm = match rest {
        [] => None,
        [tag] => Some(tag.parse::<Algorithm>().map_err(|e| e.to_string())?),
        _ => return Err("too many arguments".into()),
    };
    Ok(TrialConfig {
        scramble_depth: Some(depth),
        seed: Some(seed),
        algorithm,
        ..TrialConfig::default()
    })
}

fn main() -> ExitCode {
    logging::init();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };
    let outcome = match run_trial(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("trial failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("seed={}", outcome.seed);
    println!("scramble={}", format_moves(&outcome.scramble.moves));
    println!("start_fingerprint={}", outcome.scramble.state.fingerprint());
    println!("algorithm={}", outcome.algorithm);
    println!("solution={}", format_moves(&outcome.result.moves));
    println!("length={}", outcome.result.moves.len());
    println!("nodes_explored={}", outcome.result.nodes_explored);
    println!("termination={}", outcome.result.termination);
    println!("replay_solved={}", outcome.verdict.is_solved());
    println!("report_digest={}", outcome.report.digest());
    ExitCode::SUCCESS
}
