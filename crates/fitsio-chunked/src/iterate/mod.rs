//! Chunked iteration over one handle or several handles in lockstep.

pub mod chunked;
pub mod windows;
pub mod zip;

pub use chunked::{ChunkedIterator, Chunks, HandleExt};
pub use windows::RowWindows;
pub use zip::{zip_chunks, zip_chunks_with, ZipChunks};
