use alloc::vec::Vec;

use bstr::ByteSlice;
use quickcheck::QuickCheck;

use super::arbitrary::{PredicateKind, Text, test_count};
use crate::{FilteredStringView, compose, split, substr};

/// Property: composing two predicates keeps exactly the bytes both accept,
/// whatever the source view's own predicate hid.
#[test]
fn compose_is_intersection() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(
        text: Text,
        source: PredicateKind,
        first: PredicateKind,
        second: PredicateKind,
    ) -> bool {
        let view = FilteredStringView::with_filter(&text.0, source.build());
        let composed = compose(&view, [first.build(), second.build()]);
        let expected: Vec<u8> = text
            .0
            .iter()
            .copied()
            .filter(|&c| first.accepts(c) && second.accepts(c))
            .collect();

        let unfiltered = compose(&composed, []);
        composed.to_vec() == expected
            && composed.as_ptr() == view.as_ptr()
            && composed.raw_len() == view.raw_len()
            && unfiltered.predicate().is_accept_all()
            && unfiltered == text.0.as_slice()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Text, PredicateKind, PredicateKind, PredicateKind) -> bool);
}

/// Property: joining the segments with the delimiter restores the filtered
/// content, and no segment contains the delimiter.
#[test]
fn split_then_join_restores_content() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, kind: PredicateKind, delimiter: Vec<u8>) -> bool {
        let delimiter: Vec<u8> = delimiter.into_iter().take(3).collect();
        let view = FilteredStringView::with_filter(&text.0, kind.build());
        let parts = split(&view, &FilteredStringView::new(&delimiter));

        if delimiter.is_empty() || view.is_empty() {
            return parts.is_whole() && parts.len() == 1;
        }

        let segments: Vec<Vec<u8>> = parts.iter().map(|s| s.to_vec()).collect();
        let joined = segments.join(delimiter.as_slice());
        let expected_len = view.to_vec().find_iter(&delimiter).count() + 1;

        joined == view.to_vec()
            && segments.len() == expected_len
            && segments.iter().all(|s| s.find(&delimiter).is_none())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Text, PredicateKind, Vec<u8>) -> bool);
}

/// Property: `substr` selects the same bytes as slicing the materialized
/// content with the clamping rules applied, and aliases the buffer.
#[test]
fn substr_matches_clamped_slice() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, kind: PredicateKind, position: i8, count: i8) -> bool {
        let view = FilteredStringView::with_filter(&text.0, kind.build());
        let content = view.to_vec();
        let sub = substr(&view, isize::from(position), isize::from(count));

        let start = usize::try_from(position).unwrap_or(0).min(content.len());
        let stop = match usize::try_from(count) {
            Ok(n) if n > 0 => (start + n).min(content.len()),
            _ => content.len(),
        };

        let raw = text.0.as_ptr_range();
        let aliases = sub.raw_len() == 0 || raw.contains(&sub.as_ptr());
        sub.to_vec() == content[start..stop] && aliases
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Text, PredicateKind, i8, i8) -> bool);
}
