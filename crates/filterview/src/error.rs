use thiserror::Error;

/// Returned by [`FilteredStringView::at`](crate::FilteredStringView::at) when
/// the requested filtered index does not name a visible byte.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("filtered_string_view::at({index}): invalid index")]
pub struct RangeError {
    /// The offending index, exactly as the caller passed it.
    pub index: isize,
}

impl RangeError {
    pub(crate) fn new(index: isize) -> Self {
        Self { index }
    }
}
