use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{BioSplitError, Result};

/// An input file held fully in memory, indexed by line.
///
/// Every line keeps its terminator, so slicing a line range returns the
/// exact bytes of the original file.
pub struct SourceDocument {
    path: PathBuf,
    content: String,
    /// Byte offset where each line starts, plus a final entry at `content.len()`
    offsets: Vec<usize>,
}

impl SourceDocument {
    /// Read a file into memory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BioSplitError::ReadInput {
            path: path.to_path_buf(),
            source: e,
        })?;
        let doc = Self::from_text(path, content);
        debug!("Loaded {}: {} lines, {} bytes", path.display(), doc.line_count(), doc.content.len());
        Ok(doc)
    }

    /// Build a document from text already in memory
    pub fn from_text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let mut offsets = vec![0];
        offsets.extend(
            content
                .match_indices('\n')
                .map(|(i, _)| i + 1)
                .filter(|&end| end < content.len()),
        );
        if content.is_empty() {
            offsets.clear();
        }
        offsets.push(content.len());

        Self {
            path: path.into(),
            content,
            offsets,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Line `i` including its terminator
    pub fn line(&self, i: usize) -> &str {
        &self.content[self.offsets[i]..self.offsets[i + 1]]
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.line_count()).map(move |i| self.line(i))
    }

    /// Exact text of a line range, end exclusive
    pub fn slice(&self, lines: Range<usize>) -> &str {
        &self.content[self.offsets[lines.start]..self.offsets[lines.end]]
    }

    /// File name without its last extension (`reads.fq.gz` -> `reads.fq`)
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string())
    }

    /// Last extension including the dot, or an empty string
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default()
    }
}
