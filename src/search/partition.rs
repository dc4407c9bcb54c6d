//! Dictionary partitioning
//!
//! Splits a word list into contiguous chunks, one per search worker.

use std::ops::Range;

/// Compute chunk boundaries for `len` items split across `num_chunks` workers
///
/// Every chunk holds `len / num_chunks` items except the last, which runs to
/// the end and absorbs the remainder. When there are more chunks than items the
/// leading chunks are empty. A chunk count of zero is treated as one.
///
/// # Examples
/// ```
/// use word_descrambler::search::chunk_bounds;
///
/// assert_eq!(chunk_bounds(10, 3), vec![0..3, 3..6, 6..10]);
/// assert_eq!(chunk_bounds(2, 4), vec![0..0, 0..0, 0..0, 0..2]);
/// ```
#[must_use]
pub fn chunk_bounds(len: usize, num_chunks: usize) -> Vec<Range<usize>> {
    let num_chunks = num_chunks.max(1);
    let chunk_size = len / num_chunks;

    (0..num_chunks)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i == num_chunks - 1 {
                len
            } else {
                (i + 1) * chunk_size
            };
            start..end
        })
        .collect()
}

/// Split `items` into contiguous slices following [`chunk_bounds`]
#[must_use]
pub fn partition<T>(items: &[T], num_chunks: usize) -> Vec<&[T]> {
    chunk_bounds(items.len(), num_chunks)
        .into_iter()
        .map(|range| &items[range])
        .collect()
}
