//! Round generation: drawing source numbers and picking a fair target.

use countdown_config::{ConfigError, RoundConfig, SolverConfig};
use countdown_core::{SourceNumbers, SOURCE_COUNT};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::{FullAnalysis, TargetAnalysis};
use crate::handle::solve_with_config;

/// A playable round: the numbers, the chosen target and its analysis.
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    pub numbers: SourceNumbers,
    pub target: u32,
    pub analysis: TargetAnalysis,
    /// Whether the target passed the reasonableness filter, rather than
    /// being a fallback pick.
    pub reasonable: bool,
    /// Number sets drawn before this one was accepted (1-based).
    pub attempts: usize,
}

/// Draws round numbers and chooses targets.
///
/// # Examples
///
/// ```
/// use countdown_config::SolverConfig;
/// use countdown_solver::RoundGenerator;
///
/// let generator = RoundGenerator::new(SolverConfig::new().with_random_seed(7)).unwrap();
/// let mut rng = generator.rng();
/// let numbers = generator.generate_numbers(&mut rng).unwrap();
///
/// let large = numbers.as_slice().iter().filter(|&&n| n >= 10).count();
/// assert_eq!(large, 2);
/// ```
#[derive(Debug, Clone)]
pub struct RoundGenerator {
    config: SolverConfig,
}

impl RoundGenerator {
    /// Creates a generator, validating the configuration.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn round_config(&self) -> &RoundConfig {
        &self.config.round
    }

    /// Returns a generator RNG: seeded from `random_seed` when configured,
    /// otherwise from the thread RNG.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Draws the small numbers (with repetition) and distinct large numbers,
    /// then shuffles them.
    pub fn generate_numbers<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> countdown_core::Result<SourceNumbers> {
        let round = self.round_config();
        let mut values: Vec<i64> = Vec::with_capacity(SOURCE_COUNT);

        for _ in 0..round.small_count {
            values.push(i64::from(rng.random_range(round.small_min..=round.small_max)));
        }
        values.extend(
            round
                .large_pool
                .choose_multiple(rng, round.large_count)
                .map(|&n| i64::from(n)),
        );
        values.shuffle(rng);

        SourceNumbers::new(&values)
    }

    /// Picks a target uniformly among the reasonable ones, falling back to
    /// any reachable target. `None` if nothing is reachable.
    ///
    /// Returns the target and whether it was reasonable.
    pub fn choose_target<R: Rng + ?Sized>(
        &self,
        analysis: &FullAnalysis,
        rng: &mut R,
    ) -> Option<(u32, bool)> {
        let round = self.round_config();
        let reasonable: Vec<u32> = analysis
            .all_targets
            .iter()
            .filter(|t| round.is_reasonable(t.number_of_paths, t.average_difficulty))
            .map(|t| t.target)
            .collect();

        if let Some(&target) = reasonable.choose(rng) {
            return Some((target, true));
        }
        analysis
            .all_targets
            .choose(rng)
            .map(|t| (t.target, false))
    }

    /// Draws number sets until one has a reachable target, up to
    /// `round.max_attempts` sets.
    pub fn generate_round<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> countdown_core::Result<Option<Round>> {
        for attempt in 1..=self.round_config().max_attempts {
            let numbers = self.generate_numbers(rng)?;
            let handle = solve_with_config(numbers, &self.config);
            let analysis = handle.full_analysis();

            let Some((target, reasonable)) = self.choose_target(&analysis, rng) else {
                debug!(event = "round_retry", attempt = attempt as u64, numbers = %numbers);
                continue;
            };
            let Some(target_analysis) = analysis.get(target).cloned() else {
                continue;
            };

            info!(
                event = "round_generated",
                numbers = %numbers,
                target = target as u64,
                paths = target_analysis.number_of_paths as u64,
                reasonable,
                attempts = attempt as u64,
            );
            return Ok(Some(Round {
                numbers,
                target,
                analysis: target_analysis,
                reasonable,
                attempts: attempt,
            }));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SolutionIndex;

    fn generator(seed: u64) -> RoundGenerator {
        RoundGenerator::new(SolverConfig::new().with_random_seed(seed)).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SolverConfig::new().with_round(RoundConfig {
            large_count: 6,
            small_count: 0,
            ..RoundConfig::default()
        });
        assert!(RoundGenerator::new(config).is_err());
    }

    #[test]
    fn test_generate_numbers_shape() {
        let generator = generator(1);
        let mut rng = generator.rng();
        let pool = [10u32, 25, 50, 75, 100];

        for _ in 0..50 {
            let numbers = generator.generate_numbers(&mut rng).unwrap();
            let (large, small): (Vec<u32>, Vec<u32>) =
                numbers.as_slice().iter().copied().partition(|n| pool.contains(n));

            assert_eq!(small.len(), 4);
            assert!(small.iter().all(|n| (1..=9).contains(n)));
            assert_eq!(large.len(), 2);
            assert_ne!(large[0], large[1]);
        }
    }

    #[test]
    fn test_same_seed_same_numbers() {
        let a = generator(42);
        let b = generator(42);
        let (mut ra, mut rb) = (a.rng(), b.rng());
        for _ in 0..10 {
            assert_eq!(
                a.generate_numbers(&mut ra).unwrap(),
                b.generate_numbers(&mut rb).unwrap()
            );
        }
    }

    fn analysis_of(entries: &[(u32, &[&str])]) -> FullAnalysis {
        let mut index = SolutionIndex::new();
        for (target, paths) in entries {
            for path in *paths {
                index.register(*target, path);
            }
        }
        FullAnalysis::from_index(&index)
    }

    #[test]
    fn test_choose_target_prefers_reasonable() {
        // 321 has two paths of mean difficulty 5; 500 has one path
        let analysis = analysis_of(&[
            (321, &["((3 × 100) + 21)", "((300 + 20) + 1)"]),
            (500, &["(5 × 100)"]),
        ]);
        let generator = generator(3);
        let mut rng = generator.rng();
        for _ in 0..20 {
            assert_eq!(generator.choose_target(&analysis, &mut rng), Some((321, true)));
        }
    }

    #[test]
    fn test_choose_target_falls_back() {
        let analysis = analysis_of(&[(500, &["(5 × 100)"]), (600, &["(6 × 100)"])]);
        let generator = generator(3);
        let mut rng = generator.rng();
        let (target, reasonable) = generator.choose_target(&analysis, &mut rng).unwrap();
        assert!(target == 500 || target == 600);
        assert!(!reasonable);
    }

    #[test]
    fn test_choose_target_none_when_unreachable() {
        let generator = generator(3);
        let mut rng = generator.rng();
        assert_eq!(
            generator.choose_target(&FullAnalysis::default(), &mut rng),
            None
        );
    }
}
