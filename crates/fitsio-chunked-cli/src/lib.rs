//! Chunk layout planning for `fitschunk`.
//!
//! Plans are computed from handle metadata alone, so an operator can check
//! how a memory budget translates into row windows before touching any data.

pub mod plan;
pub mod table;

pub use plan::{build_plan, resolve_size_spec, ChunkPlan, HandleSummary, PlanError, ShapeArg};
pub use table::{type_table, TypeEntry};
