use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::core::DelimiterSource;
use crate::error::BioSplitError;

/// Ask for the input file and records per file, re-prompting until both are valid
pub fn prompt_for_input() -> Result<(PathBuf, NonZeroUsize), BioSplitError> {
    let theme = ColorfulTheme::default();

    let path: String = Input::with_theme(&theme)
        .with_prompt("Enter path to input file")
        .validate_with(|input: &String| validate_input_path(input))
        .interact_text()?;

    let count: String = Input::with_theme(&theme)
        .with_prompt("Enter number of sequences per split file (e.g. 250)")
        .validate_with(|input: &String| parse_records_per_file(input).map(|_| ()))
        .interact_text()?;

    let records_per_file = parse_records_per_file(&count).map_err(BioSplitError::Prompt)?;
    Ok((PathBuf::from(path.trim()), records_per_file))
}

/// Accepts a path only if it names an existing regular file
pub fn validate_input_path(input: &str) -> Result<(), String> {
    if Path::new(input.trim()).is_file() {
        Ok(())
    } else {
        Err("Invalid file path. Please try again.".to_string())
    }
}

/// Accepts digits only, greater than zero
pub fn parse_records_per_file(input: &str) -> Result<NonZeroUsize, String> {
    let input = input.trim();
    let invalid = || "Please enter a valid positive integer.".to_string();

    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    input
        .parse::<usize>()
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(invalid)
}

/// Asks the user on the terminal when no delimiter could be detected
pub struct PromptDelimiter;

impl DelimiterSource for PromptDelimiter {
    fn request_delimiter(&mut self) -> Result<String, BioSplitError> {
        let delimiter: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Could not auto-detect delimiter. Please enter the delimiter (e.g. >, @, LOCUS, etc.)")
            .allow_empty(true)
            .interact_text()?;
        Ok(delimiter)
    }
}
