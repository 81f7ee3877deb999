//! Bridge tests: plans computed from metadata agree with real scans.

use ndarray::Array2;

use fitsio_chunked::{
    load_config, zip_chunks_with, ChunkSizeSpec, Handle, HandleInfo, MemoryHandle,
};
use fitsio_chunked_cli::build_plan;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn float_handle(rows: usize, cols: usize) -> MemoryHandle {
    MemoryHandle::from_array(Array2::from_shape_fn((rows, cols), |(r, c)| {
        (r * cols + c) as f64
    }))
}

fn short_handle(rows: usize, cols: usize) -> MemoryHandle {
    MemoryHandle::from_array(Array2::from_shape_fn((rows, cols), |(r, c)| {
        ((r + c) % 1000) as i16
    }))
}

fn scanned_ranges(handles: &[&dyn Handle], spec: ChunkSizeSpec) -> Vec<[usize; 2]> {
    zip_chunks_with(handles, spec)
        .expect("Failed to start scan")
        .map(|set| {
            let range = set.expect("Read failed").range();
            [range.start, range.end]
        })
        .collect()
}

// ─── Tests ─────────────────────────────────────────────────────────────────

#[test]
fn bridge_plan_matches_single_handle_scan() {
    let handle = float_handle(1_000, 37);
    for spec in [
        ChunkSizeSpec::Rows(1),
        ChunkSizeSpec::Rows(99),
        ChunkSizeSpec::Rows(1_000),
        ChunkSizeSpec::MemoryBudgetMb(0.05),
        ChunkSizeSpec::MemoryBudgetMb(16.0),
    ] {
        let plan = build_plan(&[handle.info()], spec, usize::MAX).unwrap();
        let scanned = scanned_ranges(&[&handle], spec);
        assert_eq!(plan.ranges, scanned, "{spec:?}");
        assert_eq!(plan.chunk_count, scanned.len());
    }
}

#[test]
fn bridge_plan_matches_zipped_scan() {
    let wide = float_handle(500, 300);
    let narrow = short_handle(500, 40);
    let spec = ChunkSizeSpec::MemoryBudgetMb(0.25);

    let plan = build_plan(&[wide.info(), narrow.info()], spec, usize::MAX).unwrap();
    assert_eq!(plan.chunk_size, 262_144 / 2_400);
    assert_eq!(plan.ranges, scanned_ranges(&[&wide, &narrow], spec));
}

#[test]
fn bridge_config_drives_scan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chunking.toml");
    std::fs::write(&path, "memory_budget_mb = 0.5\n").unwrap();

    let spec = load_config(&path).unwrap().size_spec().unwrap();
    let handle = float_handle(2_000, 64);
    let ranges = scanned_ranges(&[&handle], spec);

    // 0.5 MB over 512-byte rows.
    assert_eq!(ranges.first(), Some(&[0, 1_024]));
    assert_eq!(ranges.last(), Some(&[1_024, 2_000]));
}

#[test]
fn bridge_plan_json_round_trips_through_serde() {
    let plan = build_plan(&[HandleInfo::new(10, 3, 20)], ChunkSizeSpec::Rows(4), 10).unwrap();
    let text = serde_json::to_string(&plan).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["chunk_count"], 3);
    assert_eq!(value["handles"][0]["element_type"], "ushort");
    assert_eq!(value["handles"][0]["row_bytes"], 6);
}
