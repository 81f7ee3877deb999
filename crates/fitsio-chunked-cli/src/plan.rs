//! Chunk plans for one or more handles.

use std::str::FromStr;

use serde::Serialize;

use fitsio_chunked::{
    load_config, resolve_config_path, ChunkError, ChunkSizeSpec, ChunkingConfig, ElementType,
    HandleInfo, RowWindows,
};

/// Errors raised while building a plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("invalid shape '{0}': expected ROWSxCOLS:TYPECODE, e.g. 100x50:-32")]
    BadShape(String),

    #[error(transparent)]
    Chunk(#[from] ChunkError),
}

/// Handle metadata given on the command line as `ROWSxCOLS:TYPECODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeArg(pub HandleInfo);

impl FromStr for ShapeArg {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || PlanError::BadShape(s.to_string());
        let (dims, code) = s.trim().split_once(':').ok_or_else(bad)?;
        let (rows, cols) = dims.split_once(['x', 'X']).ok_or_else(bad)?;
        let rows = rows.trim().parse().map_err(|_| bad())?;
        let columns = cols.trim().parse().map_err(|_| bad())?;
        let type_code = code.trim().parse().map_err(|_| bad())?;
        Ok(ShapeArg(HandleInfo::new(rows, columns, type_code)))
    }
}

/// Per-handle line of a plan.
#[derive(Debug, Clone, Serialize)]
pub struct HandleSummary {
    #[serde(flatten)]
    pub info: HandleInfo,
    pub element_type: ElementType,
    pub row_bytes: usize,
    /// Bytes held by the largest chunk read from this handle.
    pub chunk_bytes: usize,
}

/// The row windows a zipped scan would produce.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkPlan {
    pub chunk_size: usize,
    pub chunk_count: usize,
    pub handles: Vec<HandleSummary>,
    /// The leading windows, at most `max_ranges` of them.
    pub ranges: Vec<[usize; 2]>,
    /// Whether `ranges` stops short of `chunk_count`.
    pub ranges_truncated: bool,
    pub last_range: Option<[usize; 2]>,
}

/// Plan a lockstep scan over `infos` with one shared chunk size.
///
/// At most `max_ranges` windows are listed; the plan itself never holds more.
pub fn build_plan(
    infos: &[HandleInfo],
    spec: ChunkSizeSpec,
    max_ranges: usize,
) -> Result<ChunkPlan, PlanError> {
    let chunk_size = spec.resolve(infos)?;

    let handles = infos
        .iter()
        .map(|info| {
            let element_type = info.element_type()?;
            let row_bytes = info.row_byte_size()?;
            Ok(HandleSummary {
                info: *info,
                element_type,
                row_bytes,
                chunk_bytes: chunk_size.min(info.rows).saturating_mul(row_bytes),
            })
        })
        .collect::<Result<Vec<_>, ChunkError>>()?;

    // A zipped scan ends with its shortest member.
    let rows = infos.iter().map(|i| i.rows).min().unwrap_or(0);
    let windows = RowWindows::new(rows, chunk_size);
    let chunk_count = windows.len();
    let last_range = windows.clone().last().map(|r| [r.start, r.end]);
    let ranges: Vec<[usize; 2]> = windows
        .take(max_ranges)
        .map(|r| [r.start, r.end])
        .collect();

    tracing::info!(
        chunk_size,
        chunks = chunk_count,
        handles = handles.len(),
        "Planned chunked scan"
    );

    Ok(ChunkPlan {
        chunk_size,
        chunk_count,
        handles,
        ranges_truncated: ranges.len() < chunk_count,
        ranges,
        last_range,
    })
}

/// Chunk-size request from an optional config file plus command-line flags.
///
/// Flags replace configured values; with neither the request is invalid.
pub fn resolve_size_spec(
    config_path: Option<&str>,
    chunk_size: Option<usize>,
    memory_budget_mb: Option<f64>,
) -> Result<ChunkSizeSpec, PlanError> {
    let config = match resolve_config_path(config_path) {
        Some(path) => load_config(&path)?,
        None => ChunkingConfig::default(),
    };
    Ok(config
        .with_overrides(chunk_size, memory_budget_mb)
        .size_spec()?)
}
