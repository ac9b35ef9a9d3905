use tracing::debug;

use crate::core::SourceDocument;
use crate::models::Delimiter;

/// Indices of every line that starts a record, ascending
pub fn index_boundaries(doc: &SourceDocument, delimiter: &Delimiter) -> Vec<usize> {
    let boundaries: Vec<usize> = doc
        .lines()
        .enumerate()
        .filter(|(_, line)| delimiter.matches(line))
        .map(|(i, _)| i)
        .collect();
    debug!("Indexed {} record boundaries using '{}'", boundaries.len(), delimiter);
    boundaries
}
