use tracing::{debug, info};

use crate::core::SourceDocument;
use crate::error::{BioSplitError, Result};
use crate::models::{Delimiter, DelimiterOrigin, Detection};

/// Supplies a delimiter when none can be detected from the file
pub trait DelimiterSource {
    fn request_delimiter(&mut self) -> Result<String>;
}

impl<F> DelimiterSource for F
where
    F: FnMut() -> Result<String>,
{
    fn request_delimiter(&mut self) -> Result<String> {
        self()
    }
}

/// Source that refuses to ask, for unattended runs
pub struct NoPrompt;

impl DelimiterSource for NoPrompt {
    fn request_delimiter(&mut self) -> Result<String> {
        Err(BioSplitError::DelimiterNotDetected)
    }
}

/// Resolve the record delimiter for a document.
///
/// A preset wins outright. Otherwise the first line starting with `>` or `@`
/// decides, in document order. If neither occurs, `source` is asked once.
pub fn detect_delimiter(
    doc: &SourceDocument,
    preset: Option<&str>,
    source: &mut dyn DelimiterSource,
) -> Result<Detection> {
    if let Some(raw) = preset {
        let delimiter = Delimiter::parse(raw).ok_or(BioSplitError::EmptyDelimiter)?;
        debug!("Using preset delimiter '{}'", delimiter);
        return Ok(Detection {
            delimiter,
            origin: DelimiterOrigin::Preset,
        });
    }

    if let Some((line, delimiter)) = scan_known_prefixes(doc) {
        info!("Detected {} delimiter on line {}", delimiter.format_name(), line + 1);
        return Ok(Detection {
            delimiter,
            origin: DelimiterOrigin::AutoDetected { line },
        });
    }

    debug!("No '>' or '@' line found, requesting delimiter");
    let raw = source.request_delimiter()?;
    let delimiter = Delimiter::parse(&raw).ok_or(BioSplitError::EmptyDelimiter)?;
    Ok(Detection {
        delimiter,
        origin: DelimiterOrigin::Provided,
    })
}

fn scan_known_prefixes(doc: &SourceDocument) -> Option<(usize, Delimiter)> {
    doc.lines().enumerate().find_map(|(line, text)| {
        if text.starts_with('>') {
            Some((line, Delimiter::Fasta))
        } else if text.starts_with('@') {
            Some((line, Delimiter::Fastq))
        } else {
            None
        }
    })
}
