use crate::view::FilteredStringView;

/// The visible bytes `[position, position + count)` of `view`, as a view
/// over the same buffer with the same predicate.
///
/// Out-of-range arguments are clamped rather than rejected:
/// - a negative `position` starts at the first visible byte;
/// - a `position` at or past [`size`](FilteredStringView::size) gives an
///   empty view;
/// - a `count` of zero or less, or one that runs past the end, takes the
///   rest of the view.
///
/// The raw range of the result runs from the first to the last selected
/// visible byte, so hidden bytes between them stay in the buffer and stay
/// hidden.
///
/// ```rust
/// use filterview::{FilteredStringView, substr};
///
/// let view = FilteredStringView::new("Siberian Husky");
/// assert_eq!(substr(&view, 9, 0), "Husky");
/// assert_eq!(substr(&view, -4, 0), "Siberian Husky");
///
/// let sd = FilteredStringView::with_predicate("Sled Dog", |c| c == b'S' || c == b'D');
/// assert_eq!(substr(&sd, 0, 2), "SD");
/// ```
#[must_use]
pub fn substr<'a>(
    view: &FilteredStringView<'a>,
    position: isize,
    count: isize,
) -> FilteredStringView<'a> {
    let indices = view.filtered_indices();
    let start = usize::try_from(position).unwrap_or(0);

    let Some(&first) = indices.get(start) else {
        log::trace!(
            "substr: position {position} is past {} visible bytes, returning an empty view",
            indices.len()
        );
        let tail = &view.bytes()[view.raw_len()..];
        return FilteredStringView::from_parts(tail, view.predicate().clone());
    };

    let last = usize::try_from(count)
        .ok()
        .filter(|&n| n > 0)
        .and_then(|n| start.checked_add(n))
        .and_then(|stop| indices.get(stop - 1))
        .or(indices.last())
        .copied()
        .unwrap_or(first);
    log::trace!("substr: visible [{start}, +{count}) maps to raw [{first}, {last}]");

    FilteredStringView::from_parts(&view.bytes()[first..=last], view.predicate().clone())
}
