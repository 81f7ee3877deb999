//! Value types shared by the handle adapters and the chunk iterators.

pub mod chunk;
pub mod element;
pub mod error;
pub mod window;

// Re-export commonly used types for convenience.
pub use chunk::*;
pub use element::*;
pub use error::*;
pub use window::*;
