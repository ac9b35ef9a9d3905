use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::commands::PromptDelimiter;
use crate::core::{load_config, split_file, DelimiterSource, NoPrompt, SplitOptions};
use crate::error::BioSplitError;
use crate::models::{ConfigError, DelimiterOrigin, SplitEvent, SplitOutcome};

/// Options for the split command
#[derive(Debug, Default)]
pub struct RunOptions {
    pub config_file: Option<PathBuf>,
    pub sequences: Option<NonZeroUsize>,
    pub delimiter: Option<String>,
    pub output: Option<PathBuf>,
    pub no_prompt: bool,
    pub json: bool,
}

/// Split `input` into part files and report the result on stdout
pub fn run_split(input: &Path, options: RunOptions) -> Result<(), BioSplitError> {
    if !input.is_file() {
        return Err(BioSplitError::InputNotFound(input.to_path_buf()));
    }

    let cwd = std::env::current_dir()?;
    let config = load_config(
        &cwd,
        options.config_file.as_deref(),
        options.sequences.map(NonZeroUsize::get),
        options.delimiter,
        options.output,
        options.no_prompt,
    )?;

    let records_per_file = NonZeroUsize::new(config.split.sequences_per_file).ok_or_else(|| {
        ConfigError::InvalidValue("split.sequences_per_file must be a positive integer".to_string())
    })?;

    let split_options = SplitOptions {
        records_per_file,
        delimiter: config.split.delimiter,
        output_parent: config.output.directory,
    };

    let mut source: Box<dyn DelimiterSource> = if config.behavior.prompt_for_delimiter {
        Box::new(PromptDelimiter)
    } else {
        Box::new(NoPrompt)
    };

    let json = options.json;
    let outcome = split_file(input, &split_options, source.as_mut(), &mut |event| {
        if !json {
            print_event(&event);
        }
    })?;

    if json {
        print_json(input, &outcome)?;
    } else {
        print_outcome(&outcome);
    }

    Ok(())
}

fn print_event(event: &SplitEvent<'_>) {
    println!("{}", event_message(event));
}

/// Human-readable progress line(s) for one event
pub fn event_message(event: &SplitEvent<'_>) -> String {
    match event {
        SplitEvent::DelimiterResolved(detection) => {
            let delimiter = &detection.delimiter;
            match detection.origin {
                DelimiterOrigin::AutoDetected { .. } => {
                    format!("Detected {} format ({})", delimiter.format_name(), delimiter)
                }
                DelimiterOrigin::Preset => format!("Using delimiter: '{}'", delimiter),
                DelimiterOrigin::Provided => format!("Using custom delimiter: '{}'", delimiter),
            }
        }
        SplitEvent::RecordsIndexed {
            total,
            records_per_file,
        } => format!(
            "\nTotal sequences found: {}\nSplitting into files with {} sequences each...",
            total, records_per_file
        ),
        SplitEvent::ChunkWritten(chunk) => format!("Created: {}", chunk.path.display()),
    }
}

fn print_outcome(outcome: &SplitOutcome) {
    println!("{}", outcome_message(outcome));
}

/// Closing summary line for a run
pub fn outcome_message(outcome: &SplitOutcome) -> String {
    match outcome {
        SplitOutcome::NoRecords { .. } => "No sequences detected. Exiting.".to_string(),
        SplitOutcome::Completed(report) => format!(
            "\nCompleted successfully! {} files saved in folder '{}'.",
            report.file_count(),
            report.output_dir.display()
        ),
    }
}

fn print_json(input: &Path, outcome: &SplitOutcome) -> Result<(), BioSplitError> {
    let value = json_summary(input, outcome)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// JSON document printed by `--json`
pub fn json_summary(input: &Path, outcome: &SplitOutcome) -> Result<serde_json::Value, BioSplitError> {
    let value = match outcome {
        SplitOutcome::Completed(report) => serde_json::to_value(report)?,
        SplitOutcome::NoRecords { delimiter } => serde_json::json!({
            "input": input,
            "delimiter": delimiter,
            "total_records": 0,
            "files": [],
        }),
    };
    Ok(value)
}
