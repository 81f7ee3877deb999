//! Materialized 2D data windows.

use std::ops::Range;

use ndarray::{concatenate, s, Array2, ArrayView2, Axis};

use super::element::ElementType;
use super::error::{ChunkError, ChunkResult};

/// A rows × columns block of data read from a handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Window {
    Short(Array2<i16>),
    UShort(Array2<u16>),
    Long(Array2<i32>),
    Float(Array2<f32>),
    Double(Array2<f64>),
}

/// Rust scalar types that can populate a [`Window`].
pub trait Element: Copy + 'static {
    /// The matching container element type.
    const TYPE: ElementType;

    /// Wrap a typed array into a window.
    fn wrap(array: Array2<Self>) -> Window;

    /// Borrow the window's data if it holds this type.
    fn view(window: &Window) -> Option<ArrayView2<'_, Self>>;
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident) => {
        impl Element for $ty {
            const TYPE: ElementType = ElementType::$variant;

            fn wrap(array: Array2<Self>) -> Window {
                Window::$variant(array)
            }

            fn view(window: &Window) -> Option<ArrayView2<'_, Self>> {
                match window {
                    Window::$variant(a) => Some(a.view()),
                    _ => None,
                }
            }
        }
    };
}

impl_element!(i16, Short);
impl_element!(u16, UShort);
impl_element!(i32, Long);
impl_element!(f32, Float);
impl_element!(f64, Double);

macro_rules! each_variant {
    ($window:expr, $a:ident => $body:expr) => {
        match $window {
            Window::Short($a) => $body,
            Window::UShort($a) => $body,
            Window::Long($a) => $body,
            Window::Float($a) => $body,
            Window::Double($a) => $body,
        }
    };
}

impl Window {
    /// Wrap a typed array.
    pub fn new<T: Element>(array: Array2<T>) -> Self {
        T::wrap(array)
    }

    /// Element type held by this window.
    pub fn element_type(&self) -> ElementType {
        match self {
            Window::Short(_) => ElementType::Short,
            Window::UShort(_) => ElementType::UShort,
            Window::Long(_) => ElementType::Long,
            Window::Float(_) => ElementType::Float,
            Window::Double(_) => ElementType::Double,
        }
    }

    pub fn nrows(&self) -> usize {
        each_variant!(self, a => a.nrows())
    }

    pub fn ncols(&self) -> usize {
        each_variant!(self, a => a.ncols())
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// Size of the data in bytes.
    pub fn byte_len(&self) -> usize {
        self.nrows() * self.ncols() * self.element_type().byte_size()
    }

    /// Typed view of the data, or `None` if `T` is not the stored type.
    pub fn view<T: Element>(&self) -> Option<ArrayView2<'_, T>> {
        T::view(self)
    }

    /// Copy out rows `[start, end)` across all columns.
    ///
    /// Panics if the range exceeds the window, like ndarray slicing.
    pub fn slice_rows(&self, rows: Range<usize>) -> Window {
        each_variant!(self, a => Window::new(a.slice(s![rows, ..]).to_owned()))
    }

    /// Stack consecutive windows of one element type along the row axis.
    pub fn concat(windows: &[Window]) -> ChunkResult<Window> {
        let first = windows.first().ok_or_else(|| {
            ChunkError::InvalidArgument("cannot concatenate zero windows".to_string())
        })?;
        match first.element_type() {
            ElementType::Short => concat_typed::<i16>(windows),
            ElementType::UShort => concat_typed::<u16>(windows),
            ElementType::Long => concat_typed::<i32>(windows),
            ElementType::Float => concat_typed::<f32>(windows),
            ElementType::Double => concat_typed::<f64>(windows),
        }
    }
}

fn concat_typed<T: Element>(windows: &[Window]) -> ChunkResult<Window> {
    let views = windows
        .iter()
        .map(|w| {
            w.view::<T>().ok_or_else(|| {
                ChunkError::InvalidArgument(format!(
                    "cannot concatenate {} window with {} windows",
                    w.element_type(),
                    T::TYPE
                ))
            })
        })
        .collect::<ChunkResult<Vec<_>>>()?;

    let stacked = concatenate(Axis(0), &views)
        .map_err(|e| ChunkError::InvalidArgument(format!("window shapes disagree: {e}")))?;
    Ok(Window::new(stacked))
}
