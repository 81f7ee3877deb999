//! Chunk descriptors and chunk-size requests.

use std::ops::Range;

use super::error::{ChunkError, ChunkResult};
use super::window::Window;

/// Bytes per megabyte used when converting a memory budget.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One step of a chunked scan: the data plus the rows it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// Rows `[range.start, range.end)` across every column.
    pub data: Window,
    /// Half-open row range of `data` within the handle.
    pub range: Range<usize>,
}

impl Chunk {
    /// Number of rows in this chunk.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Aligned chunks produced by [`zip_chunks`](crate::iterate::zip_chunks).
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkSet {
    /// Only one handle was zipped.
    Single(Chunk),
    /// One chunk per handle, in input order.
    Multiple(Vec<Chunk>),
}

impl ChunkSet {
    /// Range of the first chunk; all members share it for equal-length handles.
    pub fn range(&self) -> Range<usize> {
        match self {
            ChunkSet::Single(chunk) => chunk.range.clone(),
            ChunkSet::Multiple(chunks) => chunks
                .first()
                .map(|c| c.range.clone())
                .unwrap_or(0..0),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ChunkSet::Single(_) => 1,
            ChunkSet::Multiple(chunks) => chunks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Member chunks in input order.
    pub fn into_vec(self) -> Vec<Chunk> {
        match self {
            ChunkSet::Single(chunk) => vec![chunk],
            ChunkSet::Multiple(chunks) => chunks,
        }
    }
}

/// How large each chunk should be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChunkSizeSpec {
    /// Fixed number of rows per chunk.
    Rows(usize),
    /// Largest row count whose data fits in this many megabytes.
    MemoryBudgetMb(f64),
}

impl ChunkSizeSpec {
    /// Build a spec from optional keyword-style arguments.
    ///
    /// An explicit chunk size takes precedence over a memory budget.
    pub fn from_options(
        chunk_size: Option<usize>,
        memory_budget_mb: Option<f64>,
    ) -> ChunkResult<Self> {
        match (chunk_size, memory_budget_mb) {
            (Some(rows), _) => Ok(ChunkSizeSpec::Rows(rows)),
            (None, Some(mb)) => {
                if !mb.is_finite() || mb < 0.0 {
                    return Err(ChunkError::InvalidArgument(format!(
                        "memory budget must be a non-negative number of megabytes, got {mb}"
                    )));
                }
                Ok(ChunkSizeSpec::MemoryBudgetMb(mb))
            }
            (None, None) => Err(ChunkError::InvalidArgument(
                ChunkError::MISSING_SIZE.to_string(),
            )),
        }
    }

    /// Convert a memory budget into whole rows, rounding down.
    ///
    /// `row_bytes == 0` means every row is free, so the budget admits any count.
    pub fn rows_within(memory_budget_mb: f64, row_bytes: usize) -> usize {
        let budget_bytes = (memory_budget_mb * BYTES_PER_MB).floor() as u128;
        if row_bytes == 0 {
            return usize::MAX;
        }
        let rows = budget_bytes / row_bytes as u128;
        rows.min(usize::MAX as u128) as usize
    }
}
