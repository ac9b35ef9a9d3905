//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a scratch directory holding one input file
pub fn create_input(file_name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write input file");
    (temp_dir, path)
}

/// FASTA text with `count` records of two sequence lines each
pub fn fasta_records(count: usize) -> String {
    (1..=count)
        .map(|i| format!(">seq{} sample record\nACGTACGTAC\nGGTTAACC{}\n", i, i))
        .collect()
}

/// FASTQ text with `count` four-line records; some quality lines start with '@'
pub fn fastq_records(count: usize) -> String {
    (1..=count)
        .map(|i| format!("@read{}\nACGTN\n+\nIIII{}\n", i, if i % 2 == 0 { "@" } else { "#" }))
        .collect()
}

/// Read the parts in part order
pub fn read_parts(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| fs::read_to_string(p).expect("Failed to read part file"))
        .collect()
}

/// Sorted file names inside a directory
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read output dir")
        .map(|e| e.expect("bad entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
