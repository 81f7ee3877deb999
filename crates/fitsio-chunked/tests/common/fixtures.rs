//! Test data fixtures for chunked iteration tests.

use std::cell::{Cell, RefCell};
use std::ops::Range;

use ndarray::Array2;
use rand::Rng;

use fitsio_chunked::{BoxError, Handle, MemoryHandle, Window};

/// Random integers in `[low, high)` with the given shape.
pub fn random_i32(rows: usize, cols: usize, low: i32, high: i32) -> Array2<i32> {
    let mut rng = rand::thread_rng();
    Array2::from_shape_fn((rows, cols), |_| rng.gen_range(low..high))
}

pub fn random_f64(rows: usize, cols: usize) -> Array2<f64> {
    let mut rng = rand::thread_rng();
    Array2::from_shape_fn((rows, cols), |_| rng.gen_range(50.0..100.0))
}

pub fn random_i16(rows: usize, cols: usize) -> Array2<i16> {
    let mut rng = rand::thread_rng();
    Array2::from_shape_fn((rows, cols), |_| rng.gen_range(50..100))
}

/// The 100 × 50 integer "flux" image used throughout the tests.
pub fn flux_handle() -> (Array2<i32>, MemoryHandle) {
    let data = random_i32(100, 50, 0, 10);
    let handle = MemoryHandle::from_array(data.clone());
    (data, handle)
}

/// Wraps a handle and records every range it is asked to read.
pub struct RecordingHandle<H> {
    inner: H,
    reads: RefCell<Vec<Range<usize>>>,
}

impl<H: Handle> RecordingHandle<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            reads: RefCell::new(Vec::new()),
        }
    }

    pub fn reads(&self) -> Vec<Range<usize>> {
        self.reads.borrow().clone()
    }
}

impl<H: Handle> Handle for RecordingHandle<H> {
    fn row_count(&self) -> usize {
        self.inner.row_count()
    }

    fn column_count(&self) -> usize {
        self.inner.column_count()
    }

    fn element_type_code(&self) -> i32 {
        self.inner.element_type_code()
    }

    fn read_range(&self, rows: Range<usize>) -> Result<Window, BoxError> {
        self.reads.borrow_mut().push(rows.clone());
        self.inner.read_range(rows)
    }
}

/// Metadata-only handle whose reads fail once `fail_from` reads have been served.
pub struct FlakyHandle {
    pub rows: usize,
    pub columns: usize,
    pub type_code: i32,
    pub fail_from: usize,
    served: Cell<usize>,
}

impl FlakyHandle {
    pub fn new(rows: usize, columns: usize, type_code: i32, fail_from: usize) -> Self {
        Self {
            rows,
            columns,
            type_code,
            fail_from,
            served: Cell::new(0),
        }
    }

    pub fn served(&self) -> usize {
        self.served.get()
    }
}

#[derive(Debug)]
pub struct DiskError;

impl std::fmt::Display for DiskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "simulated disk failure")
    }
}

impl std::error::Error for DiskError {}

impl Handle for FlakyHandle {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn element_type_code(&self) -> i32 {
        self.type_code
    }

    fn read_range(&self, rows: Range<usize>) -> Result<Window, BoxError> {
        if self.served.get() >= self.fail_from {
            return Err(Box::new(DiskError));
        }
        self.served.set(self.served.get() + 1);
        Ok(Window::new(Array2::<f32>::zeros((rows.len(), self.columns))))
    }
}
