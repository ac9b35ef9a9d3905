use std::num::NonZeroUsize;

use crate::models::ChunkSpan;

/// Group record boundaries into chunks of at most `records_per_file` records.
///
/// Chunks are contiguous and cover `0..total_lines`: any lines before the
/// first boundary belong to the first chunk. Returns no chunks when there
/// are no boundaries.
pub fn plan_chunks(
    boundaries: &[usize],
    total_lines: usize,
    records_per_file: NonZeroUsize,
) -> Vec<ChunkSpan> {
    let per_file = records_per_file.get();

    boundaries
        .chunks(per_file)
        .enumerate()
        .map(|(k, group)| {
            let first_record = k * per_file;
            let start = if k == 0 { 0 } else { group[0] };
            let end = boundaries
                .get(first_record + per_file)
                .copied()
                .unwrap_or(total_lines);
            ChunkSpan {
                part: k + 1,
                first_record,
                records: group.len(),
                lines: start..end,
            }
        })
        .collect()
}
