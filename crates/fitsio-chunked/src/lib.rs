//! Memory-bounded chunked iteration over large 2D image-container arrays.
//!
//! A [`Handle`] is any array store that can report its shape and element type
//! and read a range of rows. [`ChunkedIterator`] walks a handle in windows of
//! a fixed row count, derived either explicitly or from a memory budget, and
//! [`zip_chunks`] walks several same-length handles in lockstep.
//!
//! ```
//! use fitsio_chunked::{ChunkedIterator, MemoryHandle};
//! use ndarray::Array2;
//!
//! let handle = MemoryHandle::from_array(Array2::<f32>::zeros((100, 50)));
//! let chunker = ChunkedIterator::new(&handle);
//! let sizes: Vec<usize> = chunker
//!     .iterate(Some(30), None)
//!     .unwrap()
//!     .map(|c| c.unwrap().len())
//!     .collect();
//! assert_eq!(sizes, vec![30, 30, 30, 10]);
//! ```

pub mod config;
pub mod handle;
pub mod iterate;
pub mod types;

pub use config::{load_config, resolve_config_path, ChunkingConfig};
pub use handle::{Container, Handle, HandleInfo, MemoryContainer, MemoryHandle};
pub use iterate::{
    zip_chunks, zip_chunks_with, ChunkedIterator, Chunks, HandleExt, RowWindows, ZipChunks,
};
pub use types::{
    element_byte_size, BoxError, Chunk, ChunkError, ChunkResult, ChunkSet, ChunkSizeSpec,
    Element, ElementType, Window,
};
