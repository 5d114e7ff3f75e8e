// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{WrapErr, bail},
};
use santa_draw::{
    AssignmentGenerator, DEFAULT_MAX_ATTEMPTS, ReceiverShuffler, SeededShuffler, ThreadShuffler,
};
use santa_draw_domain::{AssignmentMap, ParticipantSet, PriorAssignments};
use santa_draw_roster::{
    DEFAULT_OUTPUT_PATH, load_participants, load_prior_assignments, save_assignments,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_log::AsTrace;

/// Secret Santa draw - assigns every participant a Secret Child
///
/// Run without `--participants` to be prompted for each file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the participant CSV (`Employee_Name`, `Employee_EmailID`).
    #[arg(short, long)]
    participants: Option<PathBuf>,

    /// Path to last year's assignment CSV. Nobody draws the same person again.
    #[arg(short, long)]
    last_year: Option<PathBuf>,

    /// Path to write the result CSV to [default: secret_santa_result.csv]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How many shuffles to try before giving up
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..=100_000)
    )]
    max_attempts: u32,

    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// The files a draw reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DrawPlan {
    participants: PathBuf,
    last_year: Option<PathBuf>,
    output: PathBuf,
}

/// Writes a question and returns the trimmed answer line.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut answer: String = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Takes file paths from the command line, prompting for them when no
/// participant file was given.
fn resolve_plan<R: BufRead, W: Write>(
    args: &Args,
    input: &mut R,
    out: &mut W,
) -> Result<DrawPlan> {
    if let Some(participants) = &args.participants {
        return Ok(DrawPlan {
            participants: participants.clone(),
            last_year: args.last_year.clone(),
            output: args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        });
    }

    writeln!(out, "Welcome to the Secret Santa Assignment Application!")?;

    let participants: String = prompt(input, out, "Enter the path to the participant CSV file: ")?;
    if participants.is_empty() {
        bail!("A participant CSV file is required");
    }

    let last_year: Option<PathBuf> = match &args.last_year {
        Some(path) => Some(path.clone()),
        None => {
            let answer: String = prompt(
                input,
                out,
                "Enter the path to last year's assignment CSV file (optional, press Enter to skip): ",
            )?;
            (!answer.is_empty()).then(|| PathBuf::from(answer))
        }
    };

    let output: PathBuf = match &args.output {
        Some(path) => path.clone(),
        None => {
            let answer: String = prompt(
                input,
                out,
                &format!("Enter the path to save the result CSV file (default: {DEFAULT_OUTPUT_PATH}): "),
            )?;
            if answer.is_empty() {
                PathBuf::from(DEFAULT_OUTPUT_PATH)
            } else {
                PathBuf::from(answer)
            }
        }
    };

    Ok(DrawPlan {
        participants: PathBuf::from(participants),
        last_year,
        output,
    })
}

/// Loads the inputs, draws, and saves the result.
///
/// Nothing is written unless the draw succeeds.
fn draw(
    plan: &DrawPlan,
    generator: AssignmentGenerator,
    shuffler: &mut dyn ReceiverShuffler,
) -> Result<AssignmentMap> {
    let participants: ParticipantSet = load_participants(&plan.participants).wrap_err_with(|| {
        format!(
            "Failed to load participants from '{}'",
            plan.participants.display()
        )
    })?;

    let prior: Option<PriorAssignments> = match &plan.last_year {
        Some(path) => Some(load_prior_assignments(path).wrap_err_with(|| {
            format!(
                "Failed to load last year's assignments from '{}'",
                path.display()
            )
        })?),
        None => {
            info!("No previous year's file provided, proceeding without last year's constraints");
            None
        }
    };

    let assignments: AssignmentMap = generator.generate(&participants, prior.as_ref(), shuffler)?;
    save_assignments(&plan.output, &assignments)
        .wrap_err_with(|| format!("Failed to save results to '{}'", plan.output.display()))?;
    Ok(assignments)
}

fn run<R: BufRead, W: Write>(args: &Args, input: &mut R, out: &mut W) -> Result<AssignmentMap> {
    let plan: DrawPlan = resolve_plan(args, input, out)?;
    let generator: AssignmentGenerator =
        AssignmentGenerator::new().with_max_attempts(args.max_attempts);

    let mut shuffler: Box<dyn ReceiverShuffler> = if let Some(seed) = args.seed {
        info!(seed, "Using seeded shuffling");
        Box::new(SeededShuffler::new(seed))
    } else {
        Box::new(ThreadShuffler)
    };

    let assignments: AssignmentMap = draw(&plan, generator, shuffler.as_mut())?;
    writeln!(
        out,
        "Results successfully saved to {}",
        plan.output.display()
    )?;
    Ok(assignments)
}

fn init_tracing(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.log_level());

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    if let Err(err) = run(&args, &mut input, &mut out) {
        error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}
