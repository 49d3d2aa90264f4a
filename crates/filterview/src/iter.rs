use core::{fmt, iter::FusedIterator};

use crate::{predicate::Predicate, view::FilteredStringView};

/// Double-ended iterator over the visible bytes of a
/// [`FilteredStringView`].
///
/// `front` and `back` delimit the raw range not yet yielded; each step skips
/// hidden bytes, so walking the whole view costs one predicate call per raw
/// byte.
#[derive(Clone)]
pub struct Iter<'v> {
    bytes: &'v [u8],
    predicate: &'v Predicate<'v>,
    front: usize,
    back: usize,
}

impl<'v> Iter<'v> {
    pub(crate) fn new(bytes: &'v [u8], predicate: &'v Predicate<'v>) -> Self {
        Self {
            bytes,
            predicate,
            front: 0,
            back: bytes.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        while self.front < self.back {
            let c = self.bytes[self.front];
            self.front += 1;
            if self.predicate.test(c) {
                return Some(c);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        if self.predicate.is_accept_all() {
            (remaining, Some(remaining))
        } else {
            (0, Some(remaining))
        }
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        while self.back > self.front {
            self.back -= 1;
            let c = self.bytes[self.back];
            if self.predicate.test(c) {
                return Some(c);
            }
        }
        None
    }
}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

/// A position inside one particular [`FilteredStringView`].
///
/// Positions range over the raw buffer, `0..=raw_len()`, where `raw_len()`
/// is the end position. A cursor obtained from
/// [`begin`](FilteredStringView::begin) and moved with
/// [`move_next`](Self::move_next) or [`move_prev`](Self::move_prev) only
/// ever rests on visible bytes or on the end.
///
/// Two cursors are equal only if they belong to the same view instance and
/// sit at the same position; cursors of distinct views never compare equal,
/// even over the same buffer.
///
/// ```rust
/// use filterview::FilteredStringView;
///
/// let view = FilteredStringView::with_predicate("tosa", |c| !b"aeiou".contains(&c));
/// let mut cursor = view.end();
/// cursor.move_prev();
/// assert_eq!(cursor.get(), Some(b's'));
/// cursor.move_prev();
/// assert_eq!(cursor.get(), Some(b't'));
/// assert!(cursor == view.begin());
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'v, 'a> {
    view: &'v FilteredStringView<'a>,
    pos: usize,
}

impl<'v, 'a> Cursor<'v, 'a> {
    pub(crate) fn new(view: &'v FilteredStringView<'a>, pos: usize) -> Self {
        Self { view, pos }
    }

    /// The view this cursor walks.
    #[must_use]
    pub fn view(&self) -> &'v FilteredStringView<'a> {
        self.view
    }

    /// Raw offset into the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` at the end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.pos >= self.view.raw_len()
    }

    /// The byte under the cursor, or `None` at the end.
    #[must_use]
    pub fn get(&self) -> Option<u8> {
        self.view.bytes().get(self.pos).copied()
    }

    /// Advances to the next visible byte, or to the end if there is none.
    /// Does nothing at the end.
    pub fn move_next(&mut self) {
        let bytes = self.view.bytes();
        if self.pos >= bytes.len() {
            return;
        }
        let predicate = self.view.predicate();
        self.pos = bytes[self.pos + 1..]
            .iter()
            .position(|&c| predicate.test(c))
            .map_or(bytes.len(), |skip| self.pos + 1 + skip);
    }

    /// Retreats to the previous visible byte. Does nothing if no visible
    /// byte precedes the cursor.
    pub fn move_prev(&mut self) {
        let bytes = self.view.bytes();
        let predicate = self.view.predicate();
        let upto = self.pos.min(bytes.len());
        if let Some(prev) = bytes[..upto].iter().rposition(|&c| predicate.test(c)) {
            self.pos = prev;
        }
    }

    /// Moves `n` steps forward, stopping at the end.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            if self.is_end() {
                break;
            }
            self.move_next();
        }
    }

    /// Returns a copy of this cursor moved one step forward.
    #[must_use]
    pub fn successor(mut self) -> Self {
        self.move_next();
        self
    }

    /// Returns a copy of this cursor moved one step back.
    #[must_use]
    pub fn predecessor(mut self) -> Self {
        self.move_prev();
        self
    }
}

impl PartialEq for Cursor<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.view, other.view) && self.pos == other.pos
    }
}

impl Eq for Cursor<'_, '_> {}

impl fmt::Debug for Cursor<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("view", &core::ptr::from_ref(self.view))
            .field("pos", &self.pos)
            .finish()
    }
}
