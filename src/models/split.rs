use serde::Serialize;
use std::ops::Range;
use std::path::PathBuf;

use super::{Delimiter, Detection};

/// One planned output file: a run of whole records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSpan {
    /// 1-based part number
    pub part: usize,
    /// Index of the first record in this chunk
    pub first_record: usize,
    /// Number of records in this chunk
    pub records: usize,
    /// Line range covered, end exclusive
    pub lines: Range<usize>,
}

impl ChunkSpan {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// A part file that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenChunk {
    pub part: usize,
    pub path: PathBuf,
    pub records: usize,
    pub lines: usize,
}

/// Summary of a completed split
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub input: PathBuf,
    pub delimiter: Delimiter,
    pub records_per_file: usize,
    pub total_records: usize,
    pub total_lines: usize,
    pub output_dir: PathBuf,
    pub files: Vec<WrittenChunk>,
}

impl SplitReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Result of running the splitter on one input
#[derive(Debug, Clone)]
pub enum SplitOutcome {
    /// No line starts with the delimiter; nothing was written.
    /// `delimiter` is `None` when the input was empty and none was preset.
    NoRecords { delimiter: Option<Delimiter> },
    Completed(SplitReport),
}

/// Progress notifications emitted while splitting
#[derive(Debug)]
pub enum SplitEvent<'a> {
    DelimiterResolved(&'a Detection),
    RecordsIndexed { total: usize, records_per_file: usize },
    ChunkWritten(&'a WrittenChunk),
}
