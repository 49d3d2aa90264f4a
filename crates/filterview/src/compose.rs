use crate::{predicate::Predicate, view::FilteredStringView};

/// Combines `predicates` into one predicate and installs it on the buffer of
/// `view`.
///
/// The result views the same buffer with the same raw length. A byte is
/// visible only if every predicate in `predicates`, in order, accepts it;
/// evaluation stops at the first rejection. The predicate of `view` itself
/// takes no part: it is replaced, so bytes it hid may reappear. With no
/// predicates the result is accept-all.
///
/// ```rust
/// use filterview::{FilteredStringView, Predicate, compose};
///
/// let langs = FilteredStringView::new("c / c++");
/// let view = compose(
///     &langs,
///     [
///         Predicate::new(|c| c == b'c' || c == b'+' || c == b'/'),
///         Predicate::new(|c| c > b' '),
///         Predicate::accept_all(),
///     ],
/// );
/// assert_eq!(view.to_string(), "c/c++");
/// assert_eq!(view.as_ptr(), langs.as_ptr());
///
/// let no_a = FilteredStringView::with_predicate("abc", |c| c != b'a');
/// assert_eq!(compose(&no_a, []), "abc");
/// ```
pub fn compose<'a, I>(view: &FilteredStringView<'a>, predicates: I) -> FilteredStringView<'a>
where
    I: IntoIterator<Item = Predicate<'a>>,
{
    let layers: alloc::vec::Vec<Predicate<'a>> = predicates.into_iter().collect();
    log::trace!("compose: layering {} predicates", layers.len());

    let combined = Predicate::accept_all().and_all(layers);
    view.with_same_buffer(combined)
}
