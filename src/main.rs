//! Command-line front end: the standalone ingestion step plus the quiz
//! consumer of the collaborator surface.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use statement_core::grouping::RecordGroups;
use statement_core::pipeline::{IngestConfig, IngestPipeline};
use statement_core::quiz;

#[derive(Parser)]
#[command(
    name = "statement-core",
    about = "Deterministic statement-set ingestion",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ingest a CSV dataset and produce the artifact set
    Ingest {
        /// Input CSV file (header row required)
        input: PathBuf,
        /// Directory the artifacts are written into
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
        /// Validate and report without writing any files
        #[arg(long)]
        dry_run: bool,
    },
    /// Play "spot the lie" over a dataset
    Play {
        /// Input CSV file (header row required)
        input: PathBuf,
        /// Field used to group records into categories
        #[arg(long, default_value = "Category")]
        group_by: String,
        /// Category to draw rounds from
        #[arg(long)]
        category: Option<String>,
        /// Maximum number of rounds
        #[arg(long, default_value_t = 5)]
        rounds: usize,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Ingest {
            input,
            output_dir,
            dry_run,
        } => ingest(&input, &output_dir, dry_run),
        Command::Play {
            input,
            group_by,
            category,
            rounds,
        } => play(&input, &group_by, category, rounds),
    }
}

fn ingest(input: &Path, output_dir: &Path, dry_run: bool) -> Result<()> {
    let config = if dry_run {
        IngestConfig::validation_only()
    } else {
        IngestConfig::writing_to(output_dir)
    };

    let outcome = IngestPipeline::new(config)
        .run(input)
        .with_context(|| format!("ingestion failed for {}", input.display()))?;

    println!(
        "Detected fields: truths={:?}, lie={:?}",
        outcome.schema.truth_fields(),
        outcome.schema.lie_field()
    );

    let report = &outcome.report;
    println!(
        "Processed {} entries ({} duplicates removed, {} invalid)",
        report.processed_entries, report.duplicates_removed, report.invalid_entries
    );

    if report.output_files.is_empty() {
        println!("No files written (dry run).");
    } else {
        println!("Generated files:");
        for name in &report.output_files {
            println!("- {name}");
        }
    }
    Ok(())
}

fn play(input: &Path, group_by: &str, category: Option<String>, rounds: usize) -> Result<()> {
    let outcome = IngestPipeline::new(IngestConfig::validation_only())
        .run(input)
        .with_context(|| format!("could not load dataset {}", input.display()))?;

    let groups = RecordGroups::by_field(&outcome.records, group_by, "General");
    if groups.is_empty() {
        bail!("dataset has no playable records");
    }

    let category = match category {
        Some(category) => category,
        None => prompt_category(&groups.keys().collect::<Vec<_>>())?,
    };

    let mut pool = groups.get(&category);
    if pool.is_empty() {
        pool = groups.get("General");
    }
    if pool.is_empty() {
        bail!("no records in category {category:?}");
    }

    let mut rng = StdRng::from_entropy();
    let quiz_rounds = quiz::build_rounds(pool, rounds, &mut rng);

    let stdin = io::stdin();
    let mut score = 0;
    let total = quiz_rounds.len();
    for (number, round) in quiz_rounds.iter().enumerate() {
        println!("\nRound {} of {total}: which statement is the lie?", number + 1);
        for (i, statement) in round.statements.iter().enumerate() {
            println!("  {}. {statement}", i + 1);
        }
        let guess = prompt_choice(&stdin, round.statements.len())?;
        if guess == round.lie_index + 1 {
            score += 1;
            println!("Correct!");
        } else {
            println!("Wrong. The lie was: {:?}", round.lie());
        }
    }
    println!("\nFinal score: {score}/{total}");
    Ok(())
}

fn prompt_category(categories: &[&str]) -> Result<String> {
    println!("Available categories: {}", categories.join(", "));
    print!("Category [General]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let chosen = line.trim();
    Ok(if chosen.is_empty() {
        "General".to_string()
    } else {
        chosen.to_string()
    })
}

fn prompt_choice(stdin: &io::Stdin, options: usize) -> Result<usize> {
    loop {
        print!("Your answer (1-{options}): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=options).contains(&choice) => return Ok(choice),
            _ => println!("Invalid choice, try again."),
        }
    }
}
