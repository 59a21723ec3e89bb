use std::sync::OnceLock;

use countdown_core::{difficulty, SourceNumbers};
use countdown_solver::{median, solve, SolverHandle};
use countdown_test::{
    assert_path_reaches, check_path, numbers, ALL_HUNDREDS, ALL_ONES, ASCENDING, SPARSE,
    TYPICAL_ROUND,
};

fn ascending() -> &'static SolverHandle {
    static HANDLE: OnceLock<SolverHandle> = OnceLock::new();
    HANDLE.get_or_init(|| solve(numbers(ASCENDING)))
}

fn typical() -> &'static SolverHandle {
    static HANDLE: OnceLock<SolverHandle> = OnceLock::new();
    HANDLE.get_or_init(|| solve(numbers(TYPICAL_ROUND)))
}

fn assert_all_paths_valid(handle: &SolverHandle) {
    let sources = handle.numbers();
    for target in handle.list_targets() {
        assert!((100..=999).contains(&target));
        let paths = handle.paths_for(target);
        assert!(!paths.is_empty());
        for path in paths {
            if let Err(reason) = check_path(path, sources, target) {
                panic!("target {target}: {reason}");
            }
        }
    }
}

#[test]
fn test_ascending_paths_are_valid() {
    assert_all_paths_valid(ascending());
}

#[test]
fn test_typical_round_paths_are_valid() {
    assert_all_paths_valid(typical());
}

#[test]
fn test_sparse_paths_are_valid() {
    assert_all_paths_valid(&solve(numbers(SPARSE)));
}

#[test]
fn test_ascending_reaches_100() {
    let handle = ascending();
    assert!(handle.is_reachable(100));

    let paths = handle.paths_for(100);
    assert!(!paths.is_empty());
    assert_path_reaches(paths[0], handle.numbers(), 100);
}

#[test]
fn test_list_targets_ascending_and_unique() {
    let targets = typical().list_targets();
    assert!(targets.windows(2).all(|w| w[0] < w[1]));
    assert!(targets.contains(&812));
}

#[test]
fn test_equal_sources_count_path_text_once() {
    let handle = solve(numbers(ALL_HUNDREDS));
    let paths = handle.paths_for(200);

    assert_eq!(paths.iter().filter(|p| **p == "(100 + 100)").count(), 1);
    assert!(paths.contains(&"(100 + 100)"));
    // sources register their own literal
    assert_eq!(handle.paths_for(100).first(), Some(&"100"));
}

#[test]
fn test_all_ones_reach_nothing() {
    let handle = solve(numbers(ALL_ONES));
    assert!(handle.list_targets().is_empty());
    assert!(handle.paths_for(100).is_empty());
    assert!(handle.analyze(100).is_none());

    let analysis = handle.full_analysis();
    assert_eq!(analysis.total_targets, 0);
    assert!(analysis.all_targets.is_empty());
    assert!(analysis.easiest_target.is_none());
    assert!(analysis.hardest_target.is_none());
    assert!(analysis.statistics.median_paths.is_none());
    assert!(analysis.statistics.target_range.is_none());

    // intermediates still exist below the band
    assert!(handle.intermediates().len() > 6);
    assert!(handle.statistics().reached_fixpoint());
}

#[test]
fn test_repeated_solves_agree() {
    let first = typical();
    let second = solve(numbers(TYPICAL_ROUND));

    assert_eq!(first.list_targets(), second.list_targets());
    for target in first.list_targets() {
        assert_eq!(first.paths_for(target), second.paths_for(target));
    }
}

#[test]
fn test_analyze_matches_paths() {
    let handle = ascending();
    for target in handle.list_targets().into_iter().step_by(7) {
        let paths = handle.paths_for(target);
        let analysis = handle.analyze(target).unwrap();
        let scores: Vec<u32> = paths.iter().map(|p| difficulty(p)).collect();

        assert_eq!(analysis.number_of_paths, paths.len());
        let mean = scores.iter().sum::<u32>() as f64 / scores.len() as f64;
        assert!((analysis.average_difficulty - mean).abs() < 1e-9);
        assert_eq!(analysis.min_difficulty, *scores.iter().min().unwrap());
        assert_eq!(analysis.max_difficulty, *scores.iter().max().unwrap());
        assert_eq!(difficulty(&analysis.easiest_path), analysis.min_difficulty);
        assert_eq!(difficulty(&analysis.hardest_path), analysis.max_difficulty);
        assert_eq!(analysis.all_paths, paths);
    }
}

#[test]
fn test_unreachable_target_analysis() {
    let handle = ascending();
    assert!(handle.analyze(50).is_none());
    assert!(handle.analyze(1000).is_none());
}

#[test]
fn test_full_analysis_statistics() {
    let handle = typical();
    let analysis = handle.full_analysis();
    let targets = handle.list_targets();

    assert_eq!(analysis.total_targets, targets.len());
    assert_eq!(analysis.all_targets.len(), targets.len());

    let counts: Vec<usize> = targets.iter().map(|&t| handle.paths_for(t).len()).collect();
    assert_eq!(analysis.statistics.median_paths, median(&counts));

    let range = analysis.statistics.target_range.unwrap();
    assert_eq!(range.min, targets[0]);
    assert_eq!(range.max, *targets.last().unwrap());

    let easiest = analysis.easiest_target.as_ref().unwrap();
    let hardest = analysis.hardest_target.as_ref().unwrap();
    assert_eq!(easiest.number_of_paths, *counts.iter().max().unwrap());
    assert_eq!(hardest.number_of_paths, *counts.iter().min().unwrap());
    assert_eq!(analysis.all_targets[0].target, hardest.target);
}

#[test]
fn test_statistics_totals() {
    let handle = ascending();
    let stats = handle.statistics();

    assert_eq!(stats.target_count, handle.list_targets().len());
    assert_eq!(stats.intermediate_count, handle.intermediates().len());
    let paths: usize = handle
        .list_targets()
        .iter()
        .map(|&t| handle.paths_for(t).len())
        .sum();
    assert_eq!(stats.path_count, paths);
    assert!(stats.pass_count() <= 6);
}

#[test]
fn test_large_source_outside_band_is_still_used() {
    let sources = SourceNumbers::new(&[1000, 1, 1, 1, 1, 1]).unwrap();
    let handle = solve(sources);

    // 1000 itself is never a target, and everything combining it is above 999
    // except subtraction and division
    assert!(handle.is_reachable(999));
    assert!(handle.paths_for(999).contains(&"(1000 - 1)"));
    assert!(handle.is_reachable(500));
    assert_all_paths_valid(&handle);
}

fn assert_totals(handle: &SolverHandle, targets: usize, paths: usize, intermediates: usize) {
    let stats = handle.statistics();
    assert_eq!(stats.target_count, targets, "target count");
    assert_eq!(stats.path_count, paths, "path count");
    assert_eq!(stats.intermediate_count, intermediates, "intermediate count");
}

#[test]
fn test_output_volume_ascending() {
    assert_totals(ascending(), 442, 12_244, 2_755);
}

#[test]
fn test_output_volume_all_hundreds() {
    assert_totals(&solve(numbers(ALL_HUNDREDS)), 24, 255, 447);
}

#[test]
fn test_output_volume_typical_round() {
    assert_totals(typical(), 900, 56_578, 7_049);
}
