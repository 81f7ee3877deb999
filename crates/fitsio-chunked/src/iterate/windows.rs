//! Row-range arithmetic shared by every chunked scan.

use std::iter::FusedIterator;
use std::ops::Range;

/// Half-open row ranges of `chunk_size` rows covering `[0, row_count)`.
///
/// The first range is always produced, so a zero chunk size or a zero-row
/// source yields a single empty range `0..0` before stopping.
#[derive(Debug, Clone)]
pub struct RowWindows {
    row_count: usize,
    chunk_size: usize,
    start: usize,
    end: usize,
    done: bool,
}

impl RowWindows {
    pub fn new(row_count: usize, chunk_size: usize) -> Self {
        Self {
            row_count,
            chunk_size,
            start: 0,
            end: chunk_size.min(row_count),
            done: false,
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        if self.chunk_size == 0 || self.row_count <= self.start {
            return 1;
        }
        1 + (self.row_count - self.start - 1) / self.chunk_size
    }
}

impl Iterator for RowWindows {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let range = self.start..self.end;

        self.start = self.start.saturating_add(self.chunk_size);
        self.end = self
            .start
            .saturating_add(self.chunk_size)
            .min(self.row_count);
        if self.start >= self.end {
            self.done = true;
        }

        Some(range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }

    fn count(self) -> usize {
        self.remaining()
    }

    fn last(self) -> Option<Self::Item> {
        match self.remaining() {
            0 => None,
            1 => Some(self.start..self.end),
            n => Some(self.start + (n - 1) * self.chunk_size..self.row_count),
        }
    }
}

impl ExactSizeIterator for RowWindows {}

impl FusedIterator for RowWindows {}
