//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that formats the solver's structured events.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, round generated)
//! - **DEBUG**: Per-pass summaries and round retries

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

const DEFAULT_FILTER: &str = "countdown_solver=info";

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the default
/// `countdown_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(CountdownConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ____                  _      _
 / ___|___  _   _ _ __ | |_ __| | _____      ___ __
| |   / _ \| | | | '_ \| __/ _` |/ _ \ \ /\ / / '_ \
| |__| (_) | |_| | | | | || (_| | (_) \ V  V /| | | |
 \____\___/ \__,_|_| |_|\__\__,_|\___/ \_/\_/ |_| |_|
"#;

    let version_line = format!("              v{} - Numbers Round Solver\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct CountdownConsoleLayer;

impl<S: Subscriber> Layer<S> for CountdownConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("countdown") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    numbers: Option<String>,
    pass_limit: Option<u64>,
    pass_index: Option<u64>,
    pairs: Option<u64>,
    new_intermediates: Option<u64>,
    new_paths: Option<u64>,
    passes: Option<u64>,
    intermediate_count: Option<u64>,
    target_count: Option<u64>,
    path_count: Option<u64>,
    duration_ms: Option<u64>,
    target: Option<u64>,
    paths: Option<u64>,
    attempt: Option<u64>,
    attempts: Option<u64>,
    reasonable: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "numbers" => self.numbers = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "pass_limit" => self.pass_limit = Some(value),
            "pass_index" => self.pass_index = Some(value),
            "pairs" => self.pairs = Some(value),
            "new_intermediates" => self.new_intermediates = Some(value),
            "new_paths" => self.new_paths = Some(value),
            "passes" => self.passes = Some(value),
            "intermediate_count" => self.intermediate_count = Some(value),
            "target_count" => self.target_count = Some(value),
            "path_count" => self.path_count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "target" => self.target = Some(value),
            "paths" => self.paths = Some(value),
            "attempt" => self.attempt = Some(value),
            "attempts" => self.attempts = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "reasonable" {
            self.reasonable = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "numbers" => self.numbers = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "pass_end" => format_pass_end(v),
        "solve_end" => format_solve_end(v),
        "round_retry" => format_round_retry(v),
        "round_generated" => format_round_generated(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let numbers = v.numbers.as_deref().unwrap_or("[]");

    format!(
        "{} {} Solving {} │ {} pass limit",
        format_elapsed(),
        "▶".bright_green().bold(),
        numbers.bright_white().bold(),
        count(v.pass_limit).bright_yellow()
    )
}

fn format_pass_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Pass {} │ {} pairs │ {} new intermediates │ {} new paths │ {} stored",
        format_elapsed(),
        "◀".bright_blue(),
        v.pass_index.unwrap_or(0).white().bold(),
        count(v.pairs).bright_magenta(),
        count(v.new_intermediates).white(),
        count(v.new_paths).white(),
        count(v.intermediate_count).bright_black()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let targets = v.target_count.unwrap_or(0);
    let status = if targets > 0 {
        "REACHABLE".bright_green().bold().to_string()
    } else {
        "NO TARGETS".bright_red().bold().to_string()
    };

    format!(
        "{} {} Solving complete │ {} │ {} passes │ {} pairs │ {} targets │ {} paths │ {} intermediates │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.passes).white(),
        count(v.pairs).bright_magenta(),
        count(v.target_count).bright_yellow(),
        count(v.path_count).bright_yellow(),
        count(v.intermediate_count).bright_black(),
        status
    )
}

fn format_round_retry(v: &EventVisitor) -> String {
    format!(
        "{} {} Attempt {} │ {} has no reachable target",
        format_elapsed(),
        "✗".bright_red(),
        count(v.attempt).white(),
        v.numbers.as_deref().unwrap_or("[]").bright_black()
    )
}

fn format_round_generated(v: &EventVisitor) -> String {
    let quality = if v.reasonable.unwrap_or(false) {
        "reasonable".bright_green().to_string()
    } else {
        "fallback".yellow().to_string()
    };

    format!(
        "{} {} Round {} → {} │ {} paths │ {} │ {} attempts",
        format_elapsed(),
        "✓".bright_green().bold(),
        v.numbers.as_deref().unwrap_or("[]").bright_white().bold(),
        count(v.target).bright_yellow().bold(),
        count(v.paths).white(),
        quality,
        count(v.attempts).white()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
