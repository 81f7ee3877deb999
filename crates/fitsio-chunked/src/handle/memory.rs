//! In-memory array store adapter.

use std::ops::Range;

use ndarray::Array2;

use super::{Container, Handle};
use crate::types::{BoxError, ChunkError, ChunkResult, Element, Window};

/// A handle backed by a window already resident in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryHandle {
    data: Window,
}

impl MemoryHandle {
    pub fn new(data: Window) -> Self {
        Self { data }
    }

    /// Build from a typed 2D array.
    pub fn from_array<T: Element>(array: Array2<T>) -> Self {
        Self::new(Window::new(array))
    }

    /// The full backing data.
    pub fn data(&self) -> &Window {
        &self.data
    }
}

impl Handle for MemoryHandle {
    fn row_count(&self) -> usize {
        self.data.nrows()
    }

    fn column_count(&self) -> usize {
        self.data.ncols()
    }

    fn element_type_code(&self) -> i32 {
        self.data.element_type().code()
    }

    fn read_range(&self, rows: Range<usize>) -> Result<Window, BoxError> {
        if rows.start > rows.end || rows.end > self.data.nrows() {
            return Err(format!(
                "row range {}..{} out of bounds for {} rows",
                rows.start,
                rows.end,
                self.data.nrows()
            )
            .into());
        }
        Ok(self.data.slice_rows(rows))
    }
}

/// Ordered, name-addressed set of in-memory handles.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    entries: Vec<(String, MemoryHandle)>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a handle. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, handle: MemoryHandle) -> &mut Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = handle,
            None => self.entries.push((name, handle)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Container for MemoryContainer {
    type Handle = MemoryHandle;

    fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    fn handle(&self, name: &str) -> ChunkResult<&MemoryHandle> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, h)| h)
            .ok_or_else(|| ChunkError::MissingHandle(name.to_string()))
    }
}
