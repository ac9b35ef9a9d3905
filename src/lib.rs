//! BioSplit - split record-delimited sequence files into smaller parts
//!
//! BioSplit reads a FASTA, FASTQ or other text file whose records start with a
//! known line prefix, and writes runs of whole records into numbered part files
//! without ever splitting a record.
//!
//! # Architecture
//!
//! - **commands**: CLI glue (non-interactive split, interactive prompts)
//! - **core**: Pipeline stages (document loading, delimiter detection, boundary indexing, chunk planning, writing)
//! - **models**: Data structures (config, delimiter, split reports)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{BioSplitError, Result};
