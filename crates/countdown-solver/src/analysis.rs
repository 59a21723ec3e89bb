//! Per-target and global analysis of a finished search.
//!
//! The analysis is a read-only pass over the [`SolutionIndex`]. Targets
//! with many paths are easy to find; targets with few long paths are hard.
//! The round generator uses these figures to pick a fair target.

use std::cmp::Ordering;

use countdown_core::difficulty;
use serde::Serialize;

use crate::index::SolutionIndex;

/// Analysis of the paths reaching one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetAnalysis {
    pub target: u32,
    pub number_of_paths: usize,
    /// Arithmetic mean of the path difficulties.
    pub average_difficulty: f64,
    pub min_difficulty: u32,
    pub max_difficulty: u32,
    /// First path (in discovery order) with the lowest difficulty.
    pub easiest_path: String,
    /// First path (in discovery order) with the highest difficulty.
    pub hardest_path: String,
    pub all_paths: Vec<String>,
}

impl TargetAnalysis {
    /// Analyzes the given paths for `target`.
    ///
    /// Returns `None` if there are no paths.
    pub fn from_paths<'a, I>(target: u32, paths: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut all_paths = Vec::new();
        let mut total: u64 = 0;
        let mut easiest: Option<(u32, usize)> = None;
        let mut hardest: Option<(u32, usize)> = None;

        for (idx, path) in paths.into_iter().enumerate() {
            let score = difficulty(path);
            total += u64::from(score);
            if easiest.map_or(true, |(best, _)| score < best) {
                easiest = Some((score, idx));
            }
            if hardest.map_or(true, |(worst, _)| score > worst) {
                hardest = Some((score, idx));
            }
            all_paths.push(path.to_owned());
        }

        let (min_difficulty, easiest_idx) = easiest?;
        let (max_difficulty, hardest_idx) = hardest?;
        let number_of_paths = all_paths.len();

        Some(Self {
            target,
            number_of_paths,
            average_difficulty: total as f64 / number_of_paths as f64,
            min_difficulty,
            max_difficulty,
            easiest_path: all_paths[easiest_idx].clone(),
            hardest_path: all_paths[hardest_idx].clone(),
            all_paths,
        })
    }

    /// Orders by fewest paths, then higher mean difficulty.
    fn cmp_hardest_first(&self, other: &Self) -> Ordering {
        self.number_of_paths
            .cmp(&other.number_of_paths)
            .then_with(|| other.average_difficulty.total_cmp(&self.average_difficulty))
    }

    /// Orders by most paths, then lower mean difficulty.
    fn cmp_easiest_first(&self, other: &Self) -> Ordering {
        other
            .number_of_paths
            .cmp(&self.number_of_paths)
            .then_with(|| self.average_difficulty.total_cmp(&other.average_difficulty))
    }
}

/// Inclusive range of reachable targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetRange {
    pub min: u32,
    pub max: u32,
}

/// Aggregates over all reachable targets. Every field is `None` when no
/// target is reachable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisStatistics {
    pub average_paths_per_target: Option<f64>,
    pub median_paths: Option<f64>,
    pub target_range: Option<TargetRange>,
}

/// Analysis of every reachable target.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FullAnalysis {
    pub total_targets: usize,
    /// The target with the most paths.
    pub easiest_target: Option<TargetAnalysis>,
    /// The target with the fewest paths.
    pub hardest_target: Option<TargetAnalysis>,
    /// Per-target analyses, hardest first.
    pub all_targets: Vec<TargetAnalysis>,
    pub statistics: AnalysisStatistics,
}

impl FullAnalysis {
    /// Analyzes every target in `index` that has at least one path.
    ///
    /// Targets that tie on path count and mean difficulty keep the order in
    /// which they were first reached.
    pub fn from_index(index: &SolutionIndex) -> Self {
        let mut all_targets: Vec<TargetAnalysis> = index
            .targets_by_discovery()
            .filter_map(|target| TargetAnalysis::from_paths(target, index.paths(target)))
            .collect();

        if all_targets.is_empty() {
            return Self::default();
        }

        all_targets.sort_by(TargetAnalysis::cmp_hardest_first);

        let easiest_target = all_targets
            .iter()
            .min_by(|a, b| a.cmp_easiest_first(b))
            .cloned();
        let hardest_target = all_targets.first().cloned();

        let counts: Vec<usize> = all_targets.iter().map(|a| a.number_of_paths).collect();
        let total_paths: usize = counts.iter().sum();
        let target_range = all_targets
            .iter()
            .map(|a| a.target)
            .fold(None, |range: Option<TargetRange>, target| {
                Some(match range {
                    None => TargetRange {
                        min: target,
                        max: target,
                    },
                    Some(r) => TargetRange {
                        min: r.min.min(target),
                        max: r.max.max(target),
                    },
                })
            });

        Self {
            total_targets: all_targets.len(),
            easiest_target,
            hardest_target,
            statistics: AnalysisStatistics {
                average_paths_per_target: Some(total_paths as f64 / counts.len() as f64),
                median_paths: median(&counts),
                target_range,
            },
            all_targets,
        }
    }

    /// Returns the analysis for `target`, if reachable.
    pub fn get(&self, target: u32) -> Option<&TargetAnalysis> {
        self.all_targets.iter().find(|a| a.target == target)
    }
}

/// Standard median: the middle value, or the mean of the two middle values
/// for an even count. `None` for an empty slice.
pub fn median(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) as f64 / 2.0)
    } else {
        Some(sorted[middle] as f64)
    }
}
