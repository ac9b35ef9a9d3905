use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{BioSplitError, Result};

/// Writes part files into `{parent}/{base}_splits/`
pub struct ChunkWriter {
    output_dir: PathBuf,
    base: String,
    extension: String,
}

impl ChunkWriter {
    pub fn new(parent: &Path, base: &str, extension: &str) -> Self {
        Self {
            output_dir: parent.join(format!("{}_splits", base)),
            base: base.to_string(),
            extension: extension.to_string(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the given 1-based part
    pub fn part_path(&self, part: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}_part{}{}", self.base, part, self.extension))
    }

    /// Create the output directory if missing
    pub fn prepare(&self) -> Result<()> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).map_err(|e| BioSplitError::CreateOutputDir {
                path: self.output_dir.clone(),
                source: e,
            })?;
            info!("Created output directory: {}", self.output_dir.display());
        } else {
            debug!("Output directory already exists: {}", self.output_dir.display());
        }
        Ok(())
    }

    /// Write one part, replacing any previous file of the same name.
    /// The file is closed before this returns.
    pub fn write_part(&self, part: usize, content: &str) -> Result<PathBuf> {
        let path = self.part_path(part);
        let to_err = |e: std::io::Error| BioSplitError::WriteChunk {
            path: path.clone(),
            source: e,
        };

        let file = File::create(&path).map_err(to_err)?;
        let mut out = BufWriter::new(file);
        out.write_all(content.as_bytes()).map_err(to_err)?;
        out.flush().map_err(to_err)?;

        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_part_naming() {
        let writer = ChunkWriter::new(Path::new("out"), "sample", ".fasta");
        assert_eq!(writer.output_dir(), Path::new("out/sample_splits"));
        assert_eq!(
            writer.part_path(3),
            PathBuf::from("out/sample_splits/sample_part3.fasta")
        );

        let writer = ChunkWriter::new(Path::new("."), "genbank", "");
        assert_eq!(
            writer.part_path(1),
            PathBuf::from("./genbank_splits/genbank_part1")
        );
    }

    #[test]
    fn test_prepare_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ChunkWriter::new(temp_dir.path(), "reads", ".fq");
        assert!(!writer.output_dir().exists());

        writer.prepare().unwrap();
        assert!(writer.output_dir().is_dir());

        // Second call is a no-op
        writer.prepare().unwrap();
    }

    #[test]
    fn test_prepare_reports_directory_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let writer = ChunkWriter::new(&blocker, "reads", ".fq");

        match writer.prepare() {
            Err(BioSplitError::CreateOutputDir { path, .. }) => {
                assert_eq!(path, blocker.join("reads_splits"));
            }
            other => panic!("Expected CreateOutputDir, got {:?}", other),
        }
    }

    #[test]
    fn test_write_part_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ChunkWriter::new(temp_dir.path(), "reads", ".fq");
        writer.prepare().unwrap();

        let path = writer.write_part(1, "@r1\nACGT\n+\nIIII\n@r2\n").unwrap();
        let path2 = writer.write_part(1, "@r1\n").unwrap();
        assert_eq!(path, path2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "@r1\n");
    }

    #[test]
    fn test_write_without_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ChunkWriter::new(temp_dir.path(), "reads", ".fq");

        let result = writer.write_part(1, "@r1\n");
        assert!(matches!(result, Err(BioSplitError::WriteChunk { .. })));
    }
}
