//! Splitting a view on a delimiter view.
//!
//! Unlike [`substr`](crate::substr) and [`compose`](crate::compose), which
//! hand back views into the caller's buffer, splitting works on filtered
//! positions: two visible bytes that are adjacent in the filtered content
//! may sit far apart in the raw buffer, with hidden bytes between them that
//! would reappear in a raw sub-range under a different predicate. The
//! segments therefore view a materialized copy of the filtered content,
//! owned by [`SplitParts`].

use alloc::vec::Vec;
use core::ops::Range;

use bstr::ByteSlice;

use crate::{predicate::Predicate, view::FilteredStringView};

/// The result of [`split`].
///
/// Owns the storage its segments point into; each segment is handed out as
/// a [`FilteredStringView`] borrowing from `self`.
#[derive(Clone, Debug)]
pub struct SplitParts<'a> {
    parts: Parts<'a>,
}

#[derive(Clone, Debug)]
enum Parts<'a> {
    /// The source was returned as-is.
    Whole(FilteredStringView<'a>),
    /// Segments of `text`, the materialized filtered content of the source.
    Segments {
        text: Vec<u8>,
        bounds: Vec<Range<usize>>,
        predicate: Predicate<'a>,
    },
}

impl<'a> SplitParts<'a> {
    /// Number of segments. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.parts {
            Parts::Whole(_) => 1,
            Parts::Segments { bounds, .. } => bounds.len(),
        }
    }

    /// Always `false`: a split produces at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`th segment.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<FilteredStringView<'_>> {
        match &self.parts {
            Parts::Whole(view) => (i == 0).then(|| view.clone()),
            Parts::Segments {
                text,
                bounds,
                predicate,
            } => bounds
                .get(i)
                .map(|r| FilteredStringView::from_parts(&text[r.clone()], predicate.clone())),
        }
    }

    /// Iterates over the segments, left to right.
    #[must_use]
    pub fn iter(&self) -> SplitIter<'_, 'a> {
        SplitIter {
            parts: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Collects the segments.
    #[must_use]
    pub fn to_vec(&self) -> Vec<FilteredStringView<'_>> {
        self.iter().collect()
    }

    /// Returns `true` when the source came back unchanged, aliasing the
    /// original buffer rather than a materialized copy.
    #[must_use]
    pub fn is_whole(&self) -> bool {
        matches!(self.parts, Parts::Whole(_))
    }
}

impl<'s, 'a> IntoIterator for &'s SplitParts<'a> {
    type Item = FilteredStringView<'s>;
    type IntoIter = SplitIter<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the segments of a [`SplitParts`].
#[derive(Clone, Debug)]
pub struct SplitIter<'s, 'a> {
    parts: &'s SplitParts<'a>,
    front: usize,
    back: usize,
}

impl<'s> Iterator for SplitIter<'s, '_> {
    type Item = FilteredStringView<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let segment = self.parts.get(self.front);
        self.front += 1;
        segment
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SplitIter<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.parts.get(self.back)
    }
}

impl ExactSizeIterator for SplitIter<'_, '_> {}

/// Splits the filtered content of `view` on every occurrence of the filtered
/// content of `delimiter`.
///
/// Occurrences are found left to right and never overlap; at each step the
/// earliest match wins. A delimiter at either end yields an empty segment on
/// that side, and back-to-back delimiters yield empty segments between them.
/// If either filtered content is empty the result is the single, unchanged
/// `view`.
///
/// Every segment carries `view`'s predicate.
///
/// ```rust
/// use filterview::{FilteredStringView, split};
///
/// let parts = split(
///     &FilteredStringView::new("abc--def--ghi"),
///     &FilteredStringView::new("--"),
/// );
/// assert_eq!(parts.to_vec(), ["abc", "def", "ghi"]);
///
/// let parts = split(&FilteredStringView::new("xx"), &FilteredStringView::new("x"));
/// assert_eq!(parts.to_vec(), ["", "", ""]);
/// ```
#[must_use]
pub fn split<'a>(
    view: &FilteredStringView<'a>,
    delimiter: &FilteredStringView<'_>,
) -> SplitParts<'a> {
    let needle = delimiter.to_vec();
    let text = view.to_vec();

    if needle.is_empty() || text.is_empty() {
        log::trace!(
            "split: nothing to split ({} visible bytes, {}-byte delimiter)",
            text.len(),
            needle.len()
        );
        return SplitParts {
            parts: Parts::Whole(view.clone()),
        };
    }

    let mut bounds = Vec::new();
    let mut start = 0;
    for found in text.find_iter(&needle) {
        bounds.push(start..found);
        start = found + needle.len();
    }
    bounds.push(start..text.len());
    log::trace!("split: {} segments", bounds.len());

    SplitParts {
        parts: Parts::Segments {
            text,
            bounds,
            predicate: view.predicate().clone(),
        },
    }
}
