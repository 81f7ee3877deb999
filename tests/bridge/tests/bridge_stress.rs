//! Stress tests: many small chunks over a large handle.

use std::time::Instant;

use ndarray::Array2;

use fitsio_chunked::{ChunkedIterator, HandleExt, MemoryHandle, Window};

#[test]
fn stress_many_tiny_chunks_cover_every_row() {
    let rows = 200_000;
    let data = Array2::from_shape_fn((rows, 4), |(r, c)| (r * 4 + c) as i32);
    let handle = MemoryHandle::from_array(data);

    let start = Instant::now();
    let mut next_row = 0;
    let mut count = 0;
    for chunk in handle.chunked(3) {
        let chunk = chunk.expect("In-memory read failed");
        assert_eq!(chunk.range.start, next_row);
        next_row = chunk.range.end;
        count += 1;
    }
    let elapsed = start.elapsed();

    assert_eq!(next_row, rows);
    assert_eq!(count, rows.div_ceil(3));
    assert!(
        elapsed.as_secs() < 30,
        "Scanning {count} chunks took {elapsed:?}"
    );
}

#[test]
fn stress_budgeted_scan_reassembles_data() {
    let data = Array2::from_shape_fn((50_000, 25), |(r, c)| (r as f32) + (c as f32) / 100.0);
    let handle = MemoryHandle::from_array(data.clone());
    let chunker = ChunkedIterator::new(&handle);

    let windows: Vec<Window> = chunker
        .iterate(None, Some(0.75))
        .unwrap()
        .map(|c| c.unwrap().data)
        .collect();

    let per_chunk = chunker.max_rows_within(0.75).unwrap();
    assert!(windows.iter().all(|w| w.nrows() <= per_chunk));
    assert!(windows.iter().all(|w| w.byte_len() <= 786_432));
    assert_eq!(Window::concat(&windows).unwrap(), Window::new(data));
}
