use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::{detect_delimiter, index_boundaries, plan_chunks, ChunkWriter, DelimiterSource, SourceDocument};
use crate::error::Result;
use crate::models::{SplitEvent, SplitOutcome, SplitReport, WrittenChunk};

/// Settings for one split run
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub records_per_file: NonZeroUsize,
    /// Skips auto-detection when set
    pub delimiter: Option<String>,
    /// Parent of the `{base}_splits` directory
    pub output_parent: PathBuf,
}

/// Load `path` and split it
pub fn split_file(
    path: &Path,
    options: &SplitOptions,
    source: &mut dyn DelimiterSource,
    on_event: &mut dyn FnMut(SplitEvent<'_>),
) -> Result<SplitOutcome> {
    let doc = SourceDocument::load(path)?;
    split_document(&doc, options, source, on_event)
}

/// Detect, index, plan and write the parts of an in-memory document.
///
/// Nothing is written when no record boundary is found. A failed write
/// leaves earlier parts on disk.
pub fn split_document(
    doc: &SourceDocument,
    options: &SplitOptions,
    source: &mut dyn DelimiterSource,
    on_event: &mut dyn FnMut(SplitEvent<'_>),
) -> Result<SplitOutcome> {
    if doc.line_count() == 0 && options.delimiter.is_none() {
        info!("{} is empty, nothing to split", doc.path().display());
        return Ok(SplitOutcome::NoRecords { delimiter: None });
    }

    let detection = detect_delimiter(doc, options.delimiter.as_deref(), source)?;
    on_event(SplitEvent::DelimiterResolved(&detection));
    let delimiter = detection.delimiter;

    let boundaries = index_boundaries(doc, &delimiter);
    if boundaries.is_empty() {
        info!("No records found in {}", doc.path().display());
        return Ok(SplitOutcome::NoRecords {
            delimiter: Some(delimiter),
        });
    }

    let records_per_file = options.records_per_file.get();
    on_event(SplitEvent::RecordsIndexed {
        total: boundaries.len(),
        records_per_file,
    });

    let chunks = plan_chunks(&boundaries, doc.line_count(), options.records_per_file);
    info!("Splitting {} records into {} files", boundaries.len(), chunks.len());

    let writer = ChunkWriter::new(&options.output_parent, &doc.base_name(), &doc.extension());
    writer.prepare()?;

    let mut files = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let path = writer.write_part(chunk.part, doc.slice(chunk.lines.clone()))?;
        let written = WrittenChunk {
            part: chunk.part,
            path,
            records: chunk.records,
            lines: chunk.line_count(),
        };
        on_event(SplitEvent::ChunkWritten(&written));
        files.push(written);
    }

    Ok(SplitOutcome::Completed(SplitReport {
        input: doc.path().to_path_buf(),
        delimiter,
        records_per_file,
        total_records: boundaries.len(),
        total_lines: doc.line_count(),
        output_dir: writer.output_dir().to_path_buf(),
        files,
    }))
}
