//! The supported element type table.

use serde::Serialize;

use fitsio_chunked::ElementType;

#[derive(Debug, Clone, Serialize)]
pub struct TypeEntry {
    pub code: i32,
    pub name: ElementType,
    pub bytes: usize,
}

pub fn type_table() -> Vec<TypeEntry> {
    ElementType::ALL
        .iter()
        .map(|&ty| TypeEntry {
            code: ty.code(),
            name: ty,
            bytes: ty.byte_size(),
        })
        .collect()
}
