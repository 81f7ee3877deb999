//! Lockstep iteration over several handles sharing one chunk size.

use std::iter::FusedIterator;

use super::chunked::Chunks;
use crate::handle::{Handle, HandleInfo};
use crate::types::{ChunkError, ChunkResult, ChunkSet, ChunkSizeSpec};

impl ChunkSizeSpec {
    /// One chunk size valid for every handle described by `infos`.
    ///
    /// A memory budget is converted per handle and the smallest result wins,
    /// so no handle's read exceeds the budget.
    pub fn resolve(&self, infos: &[HandleInfo]) -> ChunkResult<usize> {
        if infos.is_empty() {
            return Err(ChunkError::InvalidArgument(
                "at least one handle is required".to_string(),
            ));
        }
        match *self {
            ChunkSizeSpec::Rows(rows) => Ok(rows),
            ChunkSizeSpec::MemoryBudgetMb(mb) => {
                let mut smallest = usize::MAX;
                for info in infos {
                    smallest = smallest.min(info.max_rows_within(mb)?);
                }
                tracing::debug!(
                    memory_budget_mb = mb,
                    handles = infos.len(),
                    chunk_size = smallest,
                    "Reconciled chunk size across handles"
                );
                Ok(smallest)
            }
        }
    }
}

/// Zip several handles into aligned chunks.
///
/// Handles are expected to share a row count; a mismatch is logged and the
/// scan stops with the shortest handle.
pub fn zip_chunks<'a>(
    handles: &[&'a dyn Handle],
    chunk_size: Option<usize>,
    memory_budget_mb: Option<f64>,
) -> ChunkResult<ZipChunks<'a>> {
    zip_chunks_with(
        handles,
        ChunkSizeSpec::from_options(chunk_size, memory_budget_mb)?,
    )
}

/// [`zip_chunks`] from an already-validated size request.
pub fn zip_chunks_with<'a>(
    handles: &[&'a dyn Handle],
    spec: ChunkSizeSpec,
) -> ChunkResult<ZipChunks<'a>> {
    let infos: Vec<HandleInfo> = handles.iter().map(|h| h.info()).collect();
    let chunk_size = spec.resolve(&infos)?;

    if let Some(first) = infos.first() {
        if infos.iter().any(|i| i.rows != first.rows) {
            let rows: Vec<usize> = infos.iter().map(|i| i.rows).collect();
            tracing::warn!(?rows, "Zipped handles have different row counts");
        }
    }

    let members = handles
        .iter()
        .map(|&h| Chunks::new(h, chunk_size))
        .collect();

    Ok(ZipChunks {
        members,
        chunk_size,
        done: false,
    })
}

/// Lazy sequence of [`ChunkSet`]s, one chunk per zipped handle.
pub struct ZipChunks<'a> {
    members: Vec<Chunks<'a, dyn Handle + 'a>>,
    chunk_size: usize,
    done: bool,
}

impl ZipChunks<'_> {
    /// Rows per chunk shared by every member.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Iterator for ZipChunks<'_> {
    type Item = ChunkResult<ChunkSet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut chunks = Vec::with_capacity(self.members.len());
        for member in &mut self.members {
            match member.next() {
                Some(Ok(chunk)) => chunks.push(chunk),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }

        if chunks.len() == 1 {
            chunks.pop().map(|chunk| Ok(ChunkSet::Single(chunk)))
        } else {
            Some(Ok(ChunkSet::Multiple(chunks)))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let upper = self
            .members
            .iter()
            .filter_map(|m| m.size_hint().1)
            .min()
            .unwrap_or(0);
        (0, Some(upper))
    }
}

impl FusedIterator for ZipChunks<'_> {}
