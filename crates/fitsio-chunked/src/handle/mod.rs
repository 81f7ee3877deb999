//! The capability contract an array store must offer to be chunked.
//!
//! A handle is owned by whatever opened the underlying container. This crate
//! only asks it for metadata and for materialized row ranges, one at a time.

pub mod memory;

use std::ops::Range;

use serde::Serialize;

use crate::types::{BoxError, ChunkError, ChunkResult, ChunkSizeSpec, ElementType, Window};

pub use memory::{MemoryContainer, MemoryHandle};

/// A 2D (rows × columns) array-like data source.
pub trait Handle {
    /// Total number of rows.
    fn row_count(&self) -> usize;

    /// Size of the secondary dimension.
    fn column_count(&self) -> usize;

    /// Raw element type code as reported by the container header.
    fn element_type_code(&self) -> i32;

    /// Read rows `[rows.start, rows.end)` across all columns.
    fn read_range(&self, rows: Range<usize>) -> Result<Window, BoxError>;

    /// Metadata snapshot.
    fn info(&self) -> HandleInfo {
        HandleInfo {
            rows: self.row_count(),
            columns: self.column_count(),
            type_code: self.element_type_code(),
        }
    }
}

/// Handle metadata, detached from any data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandleInfo {
    pub rows: usize,
    pub columns: usize,
    pub type_code: i32,
}

impl HandleInfo {
    pub fn new(rows: usize, columns: usize, type_code: i32) -> Self {
        Self {
            rows,
            columns,
            type_code,
        }
    }

    pub fn element_type(&self) -> ChunkResult<ElementType> {
        ElementType::from_code(self.type_code)
    }

    /// Bytes needed to hold one row across all columns.
    pub fn row_byte_size(&self) -> ChunkResult<usize> {
        let width = self.element_type()?.byte_size();
        width.checked_mul(self.columns).ok_or_else(|| {
            ChunkError::InvalidArgument(format!(
                "row of {} columns at {width} bytes each overflows usize",
                self.columns
            ))
        })
    }

    /// Largest row count whose data fits in `memory_budget_mb`.
    pub fn max_rows_within(&self, memory_budget_mb: f64) -> ChunkResult<usize> {
        let row_bytes = self.row_byte_size()?;
        Ok(ChunkSizeSpec::rows_within(memory_budget_mb, row_bytes))
    }
}

/// A named collection of handles, such as the extensions of one file.
pub trait Container {
    type Handle: Handle;

    /// Handle names in container order.
    fn names(&self) -> Vec<&str>;

    /// Look up a handle by name.
    fn handle(&self, name: &str) -> ChunkResult<&Self::Handle>;
}
