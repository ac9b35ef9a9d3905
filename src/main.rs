use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use biosplit::commands::{prompt_for_input, run_split, RunOptions};

/// BioSplit - split large sequence files without breaking records
#[derive(Parser)]
#[command(name = "biosplit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input file (FASTA/FASTQ or custom format). Prompts when omitted.
    input: Option<PathBuf>,

    /// Number of sequences per split file [default: 250]
    #[arg(short, long)]
    sequences: Option<NonZeroUsize>,

    /// Record delimiter to use instead of auto-detection (e.g. LOCUS)
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Directory in which the <name>_splits folder is created
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ./biosplit.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail instead of asking when no delimiter can be detected
    #[arg(long)]
    no_prompt: bool,

    /// Print the split report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let options = RunOptions {
        config_file: cli.config,
        sequences: cli.sequences,
        delimiter: cli.delimiter,
        output: cli.output,
        no_prompt: cli.no_prompt,
        json: cli.json,
    };

    let result = match cli.input {
        Some(input) => run_split(&input, options),
        None => prompt_for_input().and_then(|(input, sequences)| {
            run_split(
                &input,
                RunOptions {
                    sequences: Some(sequences),
                    ..options
                },
            )
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
