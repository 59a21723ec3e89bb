use countdown_core::{difficulty, Expr};
use countdown_solver::solve;
use countdown_test::{check_path, round_numbers};
use proptest::prelude::*;

proptest! {
    // Each case is a full solve; keep the count small.
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn every_path_reaches_its_target(sources in round_numbers()) {
        let handle = solve(sources);
        for target in handle.list_targets() {
            prop_assert!((100..=999).contains(&target));
            for path in handle.paths_for(target) {
                let checked = check_path(path, &sources, target);
                prop_assert!(checked.is_ok(), "{}", checked.unwrap_err());
            }
        }
    }

    #[test]
    fn analysis_agrees_with_paths(sources in round_numbers()) {
        let handle = solve(sources);
        let analysis = handle.full_analysis();
        prop_assert_eq!(analysis.total_targets, handle.list_targets().len());

        for target in analysis.all_targets.iter().step_by(25) {
            let scores: Vec<u32> = target.all_paths.iter().map(|p| difficulty(p)).collect();
            let mean = scores.iter().sum::<u32>() as f64 / scores.len() as f64;
            prop_assert!((target.average_difficulty - mean).abs() < 1e-9);
            prop_assert!(target.min_difficulty <= target.max_difficulty);

            let reparsed = Expr::parse(&target.easiest_path).unwrap().to_string();
            prop_assert_eq!(&reparsed, &target.easiest_path);
        }
    }
}
