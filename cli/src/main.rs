//! Command-line driver for the asymptote profiler.
//!
//! Profiles one of the bundled challenges and writes its JSON record and
//! SVG chart.
//!
//! # Usage
//!
//! ```bash
//! asymptote profile duplicate --base 2 --initial-order 6 --orders 6
//! asymptote profile anagrams --config profile.json --output results
//! asymptote challenges
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

// CLI tools need to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use asymptote_core::challenges::{
    encrypt_message, find_duplicate, is_anagram, is_palindrome_recursive, study_schedule,
};
use asymptote_core::export::JsonExporter;
use asymptote_core::generators::{self, Schedule};
use asymptote_core::{
    analyzed, AnalyzedFunction, ComplexityProfiler, InputGenerator, ProfilingConfig,
    ProfilingParameters,
};
use asymptote_visualization::ChartRenderer;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

/// Empirical time-complexity profiler.
#[derive(Parser, Debug)]
#[command(name = "asymptote")]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Asymptote subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Profile a bundled challenge and export its record.
    Profile(ProfileArgs),
    /// List the bundled challenges.
    Challenges,
}

/// Bundled challenges.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Challenge {
    /// Anagram check over two words of n letters.
    Anagrams,
    /// First repeated value among n integers.
    Duplicate,
    /// Recursive palindrome check over a word of n letters.
    Palindrome,
    /// Study periods covering a target time, over n periods.
    Schedule,
    /// Message scrambling over n letters.
    Encrypt,
}

impl Challenge {
    /// Parameters that keep a default run short
    fn default_parameters(self) -> ProfilingParameters {
        let base = ProfilingParameters {
            initial_order: 2,
            order_count: 4,
            magnitude_base: 10,
            execution_quantity: 100,
            repeat_count: 5,
        };
        match self {
            // recursion depth grows with the word length
            Challenge::Palindrome => ProfilingParameters {
                initial_order: 6,
                order_count: 6,
                magnitude_base: 2,
                ..base
            },
            // quadratic scan over the generated list
            Challenge::Duplicate => ProfilingParameters {
                initial_order: 1,
                order_count: 3,
                ..base
            },
            _ => base,
        }
    }
}

/// Arguments for the profile subcommand.
#[derive(Parser, Debug)]
struct ProfileArgs {
    /// Challenge to profile.
    #[arg(value_enum)]
    challenge: Challenge,

    /// JSON file with profiling parameters.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Exponent of the smallest input size.
    #[arg(long)]
    initial_order: Option<u32>,

    /// Number of input sizes to test.
    #[arg(long)]
    orders: Option<u32>,

    /// Base of the input size progression.
    #[arg(long)]
    base: Option<usize>,

    /// Invocations per timing trial.
    #[arg(long, short = 'n')]
    executions: Option<u32>,

    /// Timing trials per input size.
    #[arg(long, short)]
    repeat: Option<u32>,

    /// Directory receiving the JSON record and chart.
    #[arg(long, short, default_value = "results")]
    output: PathBuf,

    /// Run identifier used in file names.
    #[arg(long, default_value = "1")]
    id: u32,

    /// Skip the SVG chart.
    #[arg(long)]
    no_chart: bool,
}

impl ProfileArgs {
    fn parameters(&self) -> Result<ProfilingParameters> {
        let mut parameters = match &self.config {
            Some(path) => ProfilingParameters::from_json_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => self.challenge.default_parameters(),
        };

        if let Some(initial_order) = self.initial_order {
            parameters.initial_order = initial_order;
        }
        if let Some(orders) = self.orders {
            parameters.order_count = orders;
        }
        if let Some(base) = self.base {
            parameters.magnitude_base = base;
        }
        if let Some(executions) = self.executions {
            parameters.execution_quantity = executions;
        }
        if let Some(repeat) = self.repeat {
            parameters.repeat_count = repeat;
        }

        parameters.validate().context("Invalid profiling parameters")?;
        Ok(parameters)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Profile(args) => profile_challenge(&args),
        Command::Challenges => {
            for challenge in Challenge::value_variants() {
                if let Some(value) = challenge.to_possible_value() {
                    let help = value.get_help().map(ToString::to_string).unwrap_or_default();
                    println!("{:<12} {}", value.get_name(), help);
                }
            }
            Ok(())
        }
    }
}

fn profile_challenge(args: &ProfileArgs) -> Result<()> {
    let parameters = args.parameters()?;

    match args.challenge {
        Challenge::Anagrams => run(
            args,
            analyzed("is_anagram", |(first, second): &(String, String)| is_anagram(first, second)),
            generators::anagrams(),
            parameters,
        ),
        Challenge::Duplicate => run(
            args,
            analyzed("find_duplicate", |nums: &Vec<i64>| find_duplicate(nums)),
            generators::integers(),
            parameters,
        ),
        Challenge::Palindrome => run(
            args,
            analyzed("is_palindrome_recursive", |word: &String| {
                is_palindrome_recursive(word, 0, word.len().saturating_sub(1))
            }),
            generators::palindromes(),
            parameters,
        ),
        Challenge::Schedule => run(
            args,
            analyzed("study_schedule", |(periods, target): &(Vec<Schedule>, u32)| {
                study_schedule(periods, Some(*target))
            }),
            generators::schedules(),
            parameters,
        ),
        Challenge::Encrypt => run(
            args,
            analyzed("encrypt_message", |(message, key): &(String, usize)| {
                encrypt_message(message, *key)
            }),
            generators::messages(),
            parameters,
        ),
    }
}

fn run<A, G>(args: &ProfileArgs, analyzed: A, generator: G, parameters: ProfilingParameters) -> Result<()>
where
    G: InputGenerator,
    A: AnalyzedFunction<G::Input>,
{
    let config = ProfilingConfig::new(analyzed, generator, parameters);
    let record = ComplexityProfiler::new()
        .profile(&config)
        .with_context(|| format!("Failed to profile {}", config.analyzed.name()))?;

    let id = JsonExporter::new(&args.output)
        .export(&record, args.id)
        .context("Failed to export record")?;

    if !args.no_chart {
        let path = ChartRenderer::default()
            .save(&record, &args.output, args.id)
            .context("Failed to render chart")?;
        info!("Chart saved to {}", path.display());
    }

    println!("{}: {} (record {})", record.analyzed_function(), record.notation(), id);
    for (size, median, mean, std_dev) in record.measurements().points() {
        let std_dev = std_dev.map_or_else(|| "-".to_string(), |d| format!("{:.3e}", d));
        println!("  n={:<10} median={:.3e}s mean={:.3e}s std_dev={}", size, median, mean, std_dev);
    }
    Ok(())
}
