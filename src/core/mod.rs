pub mod chunk;
pub mod config;
pub mod detect;
pub mod document;
pub mod index;
pub mod splitter;
pub mod writer;

pub use chunk::*;
pub use config::*;
pub use detect::*;
pub use document::*;
pub use index::*;
pub use splitter::*;
pub use writer::*;
