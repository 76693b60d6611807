//! Headless mode: JSON snapshot lines from a virtual-clock run.

use bubble_wars::cli::{parse_args, HeadlessArgs, Mode};
use bubble_wars::headless::run_headless;
use serde_json::Value;

fn lines(out: &[u8]) -> Vec<Value> {
    std::str::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn final_line_reports_the_whole_run() {
    let args = HeadlessArgs {
        ticks: 1000,
        ..HeadlessArgs::default()
    };
    let mut out = Vec::new();
    let last = run_headless(&args, 7, &mut out).unwrap();

    let lines = lines(&out);
    assert_eq!(lines.len(), 1);
    let v = &lines[0];
    assert_eq!(v["run_state"], "running");
    assert_eq!(v["frame"], 999);
    assert_eq!(v["sound_enabled"], true);
    assert_eq!(v["stats"]["score"], last.stats.score);
    assert_eq!(v["stats"]["wave"], last.stats.wave);
    assert_eq!(v["stats"]["lives"], 3);
    assert_eq!(v["stats"]["level"], 1);
    assert!(last.stats.score <= 9 * 1000);
}

#[test]
fn every_k_ticks_emits_intermediate_snapshots() {
    let args = HeadlessArgs {
        ticks: 100,
        every: Some(25),
        ..HeadlessArgs::default()
    };
    let mut out = Vec::new();
    run_headless(&args, 3, &mut out).unwrap();

    let lines = lines(&out);
    // After ticks 25, 50, 75 and the final one.
    assert_eq!(lines.len(), 4);
    let frames: Vec<u64> = lines.iter().map(|v| v["frame"].as_u64().unwrap()).collect();
    assert_eq!(frames, vec![24, 49, 74, 99]);

    let scores: Vec<u64> = lines
        .iter()
        .map(|v| v["stats"]["score"].as_u64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn same_seed_same_output() {
    let args = HeadlessArgs {
        ticks: 500,
        every: Some(100),
        ..HeadlessArgs::default()
    };
    let mut a = Vec::new();
    let mut b = Vec::new();
    run_headless(&args, 11, &mut a).unwrap();
    run_headless(&args, 11, &mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_ticks_reports_the_starting_stats() {
    let args = HeadlessArgs {
        ticks: 0,
        ..HeadlessArgs::default()
    };
    let mut out = Vec::new();
    let last = run_headless(&args, 1, &mut out).unwrap();
    assert_eq!(last.stats.score, 0);
    assert_eq!(last.stats.wave, 1);
    assert_eq!(lines(&out).len(), 1);
}

#[test]
fn parsed_arguments_drive_the_run() {
    let argv: Vec<String> = ["headless", "--ticks", "50", "--seed", "9", "--width", "40"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let Mode::Headless(args) = parse_args(&argv).unwrap() else {
        panic!("expected headless mode");
    };
    assert_eq!(args.seed, Some(9));

    let mut out = Vec::new();
    let last = run_headless(&args, args.seed.unwrap_or(0), &mut out).unwrap();
    assert_eq!(last.frame, 49);
}
