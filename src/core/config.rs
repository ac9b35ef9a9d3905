use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::BioSplitError;
use crate::models::Config;

/// Load configuration with CLI overrides.
///
/// An explicit `config_file` must exist; otherwise `biosplit.toml` in
/// `dir` is used when present.
pub fn load_config(
    dir: &Path,
    config_file: Option<&Path>,
    sequences: Option<usize>,
    delimiter: Option<String>,
    output: Option<PathBuf>,
    no_prompt: bool,
) -> Result<Config, BioSplitError> {
    let config = match config_file {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(dir)?,
    };
    let config = config.with_overrides(sequences, delimiter, output, no_prompt);

    info!(
        "Configuration loaded: sequences_per_file={}, delimiter={:?}, output={}",
        config.split.sequences_per_file,
        config.split.delimiter,
        config.output.directory.display()
    );

    Ok(config)
}
