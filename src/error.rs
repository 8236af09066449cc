use thiserror::Error;

/// Failures reported by list operations.
///
/// A failed operation never changes the list.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("value not found in the list")]
    ValueNotFound,

    #[error("index {index} is out of range")]
    IndexOutOfRange { index: usize },
}

impl ListError {
    pub fn index_out_of_range(index: usize) -> Self {
        Self::IndexOutOfRange { index }
    }
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;
