#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// `index` is wide enough to hold both every `usize` and every negative `i64`.
    #[error("Index ({index}) out of bounds (list size = {size})")]
    IndexOutOfRange { index: i128, size: usize },
}

impl ListError {
    pub(crate) fn out_of_range(index: i128, size: usize) -> Self {
        ListError::IndexOutOfRange { index, size }
    }
}
