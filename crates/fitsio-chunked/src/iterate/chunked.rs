//! Bounded-window iteration over a single handle.

use std::iter::FusedIterator;

use super::windows::RowWindows;
use crate::handle::Handle;
use crate::types::{Chunk, ChunkError, ChunkResult, ChunkSizeSpec};

/// Wraps a handle and hands out chunked scans over it.
pub struct ChunkedIterator<'a, H: Handle + ?Sized> {
    handle: &'a H,
}

impl<'a, H: Handle + ?Sized> ChunkedIterator<'a, H> {
    pub fn new(handle: &'a H) -> Self {
        Self { handle }
    }

    pub fn row_count(&self) -> usize {
        self.handle.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.handle.column_count()
    }

    /// Bytes needed for one row across all columns.
    pub fn row_byte_size(&self) -> ChunkResult<usize> {
        self.handle.info().row_byte_size()
    }

    /// Rows that fit in `memory_budget_mb`, rounded down.
    pub fn max_rows_within(&self, memory_budget_mb: f64) -> ChunkResult<usize> {
        self.handle.info().max_rows_within(memory_budget_mb)
    }

    /// Resolve a chunk-size request to a row count for this handle.
    pub fn chunk_size_for(&self, spec: ChunkSizeSpec) -> ChunkResult<usize> {
        match spec {
            ChunkSizeSpec::Rows(rows) => Ok(rows),
            ChunkSizeSpec::MemoryBudgetMb(mb) => {
                let rows = self.max_rows_within(mb)?;
                tracing::debug!(
                    memory_budget_mb = mb,
                    chunk_size = rows,
                    "Derived chunk size from memory budget"
                );
                Ok(rows)
            }
        }
    }

    /// Start a scan. Exactly one of the two arguments is needed; an explicit
    /// chunk size wins if both are given.
    pub fn iterate(
        &self,
        chunk_size: Option<usize>,
        memory_budget_mb: Option<f64>,
    ) -> ChunkResult<Chunks<'a, H>> {
        self.iterate_with(ChunkSizeSpec::from_options(chunk_size, memory_budget_mb)?)
    }

    /// Start a scan from an already-validated size request.
    pub fn iterate_with(&self, spec: ChunkSizeSpec) -> ChunkResult<Chunks<'a, H>> {
        let chunk_size = self.chunk_size_for(spec)?;
        Ok(Chunks::new(self.handle, chunk_size))
    }
}

/// Lazy sequence of chunks from one handle. Each step issues one read.
pub struct Chunks<'a, H: Handle + ?Sized> {
    handle: &'a H,
    windows: RowWindows,
    failed: bool,
}

impl<'a, H: Handle + ?Sized> Chunks<'a, H> {
    /// Scan `handle` in fixed chunks of `chunk_size` rows.
    pub fn new(handle: &'a H, chunk_size: usize) -> Self {
        let row_count = handle.row_count();
        tracing::debug!(row_count, chunk_size, "Starting chunked scan");
        Self {
            handle,
            windows: RowWindows::new(row_count, chunk_size),
            failed: false,
        }
    }

    /// Rows per chunk for this scan.
    pub fn chunk_size(&self) -> usize {
        self.windows.chunk_size()
    }
}

impl<H: Handle + ?Sized> Iterator for Chunks<'_, H> {
    type Item = ChunkResult<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let range = self.windows.next()?;

        tracing::trace!(start = range.start, end = range.end, "Reading rows");
        match self.handle.read_range(range.clone()) {
            Ok(data) => Some(Ok(Chunk { data, range })),
            Err(e) => {
                tracing::warn!("Read of rows {}..{} failed: {e}", range.start, range.end);
                self.failed = true;
                Some(Err(ChunkError::Read(e)))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // A failed read ends the scan early.
        (0, self.windows.size_hint().1)
    }
}

impl<H: Handle + ?Sized> FusedIterator for Chunks<'_, H> {}

/// Chunked scans directly on any handle.
pub trait HandleExt: Handle {
    /// Scan in chunks of `chunk_size` rows.
    fn chunked(&self, chunk_size: usize) -> Chunks<'_, Self> {
        Chunks::new(self, chunk_size)
    }

    /// Scan in the largest chunks that fit in `memory_budget_mb`.
    fn chunked_within(&self, memory_budget_mb: f64) -> ChunkResult<Chunks<'_, Self>> {
        ChunkedIterator::new(self).iterate(None, Some(memory_budget_mb))
    }
}

impl<H: Handle + ?Sized> HandleExt for H {}
