//! Subcommand implementations. Each writes its report to stdout and
//! returns whether the command succeeded.

use anyhow::{bail, Context};
use countdown::{
    difficulty, solve_with_config, Expr, FullAnalysis, RoundGenerator, SolverConfig,
    SourceNumbers, TargetAnalysis,
};
use owo_colors::OwoColorize;
use serde_json::json;

pub fn solve(
    numbers: &[i64],
    target: Option<u32>,
    json: bool,
    config: &SolverConfig,
) -> anyhow::Result<bool> {
    let numbers = SourceNumbers::new(numbers)?;
    let handle = solve_with_config(numbers, config);

    match target {
        Some(target) => {
            let analysis = handle.analyze(target);
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                match &analysis {
                    Some(analysis) => print_target(analysis, true),
                    None => println!("{} is not reachable from {}", target, numbers),
                }
            }
            Ok(analysis.is_some())
        }
        None => {
            let targets: Vec<_> = handle
                .solutions()
                .iter()
                .map(|(target, paths)| (target, paths.len()))
                .collect();
            if json {
                let targets: Vec<_> = targets
                    .iter()
                    .map(|&(target, paths)| json!({ "target": target, "paths": paths }))
                    .collect();
                let report = json!({
                    "numbers": numbers,
                    "targets": targets,
                    "statistics": handle.statistics(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{} targets reachable from {}",
                    targets.len().bright_yellow(),
                    numbers
                );
                for (target, paths) in targets {
                    println!("  {:>3}  {:>6} paths", target, paths);
                }
            }
            Ok(true)
        }
    }
}

pub fn analyze(numbers: &[i64], json: bool, config: &SolverConfig) -> anyhow::Result<bool> {
    let numbers = SourceNumbers::new(numbers)?;
    let analysis = solve_with_config(numbers, config).full_analysis();

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_full_analysis(&numbers, &analysis);
    }
    Ok(true)
}

pub fn round(json: bool, config: SolverConfig) -> anyhow::Result<bool> {
    let generator = RoundGenerator::new(config)?;
    let mut rng = generator.rng();
    let max_attempts = generator.config().round.max_attempts;

    let Some(round) = generator.generate_round(&mut rng)? else {
        bail!("no reachable target after {} attempts", max_attempts);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&round)?);
    } else {
        println!("{} {}", "Numbers:".bold(), round.numbers);
        println!("{} {}", "Target: ".bold(), round.target.bright_yellow().bold());
        if !round.reasonable {
            println!("{}", "(no target met the difficulty filter)".bright_black());
        }
        print_target(&round.analysis, false);
    }
    Ok(true)
}

pub fn check(numbers: &[i64], target: u32, expr: &str) -> anyhow::Result<bool> {
    let numbers = SourceNumbers::new(numbers)?;
    let parsed = Expr::parse(expr).with_context(|| format!("cannot read {expr:?}"))?;
    let canonical = parsed.to_string();

    if !parsed.uses_sources(&numbers) {
        println!("{} {} uses numbers not in {}", "✗".bright_red(), canonical, numbers);
        return Ok(false);
    }
    let value = match parsed.evaluate() {
        Ok(value) => value,
        Err(err) => {
            println!("{} {} is not valid: {}", "✗".bright_red(), canonical, err);
            return Ok(false);
        }
    };
    if value != u64::from(target) {
        let distance = value.abs_diff(u64::from(target));
        println!(
            "{} {} = {} ({} away from {})",
            "✗".bright_red(),
            canonical,
            value,
            distance,
            target
        );
        return Ok(false);
    }

    println!(
        "{} {} = {} │ difficulty {}",
        "✓".bright_green().bold(),
        canonical,
        target,
        difficulty(&canonical)
    );
    Ok(true)
}

fn print_target(analysis: &TargetAnalysis, all_paths: bool) {
    println!(
        "{} │ {} paths │ difficulty {:.2} avg, {} to {}",
        analysis.target.bright_yellow().bold(),
        analysis.number_of_paths,
        analysis.average_difficulty,
        analysis.min_difficulty,
        analysis.max_difficulty
    );
    println!("  easiest: {}", analysis.easiest_path.bright_green());
    println!("  hardest: {}", analysis.hardest_path.bright_red());
    if all_paths {
        for path in &analysis.all_paths {
            println!("    {} ({})", path, difficulty(path));
        }
    }
}

fn print_full_analysis(numbers: &SourceNumbers, analysis: &FullAnalysis) {
    println!(
        "{} targets reachable from {}",
        analysis.total_targets.bright_yellow(),
        numbers
    );
    if let Some(easiest) = &analysis.easiest_target {
        print!("{} ", "Easiest:".bold());
        print_target(easiest, false);
    }
    if let Some(hardest) = &analysis.hardest_target {
        print!("{} ", "Hardest:".bold());
        print_target(hardest, false);
    }

    let stats = &analysis.statistics;
    if let (Some(average), Some(median), Some(range)) = (
        stats.average_paths_per_target,
        stats.median_paths,
        stats.target_range,
    ) {
        println!(
            "Paths per target: {:.2} avg, {} median │ targets {} to {}",
            average, median, range.min, range.max
        );
    }
}
