use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    ffi::CStr,
    fmt,
    hash::{Hash, Hasher},
    iter::Rev,
    ops::Index,
};

use bstr::{BStr, BString, ByteSlice};

use crate::{
    error::RangeError,
    iter::{Cursor, Iter},
    predicate::Predicate,
};

/// Returned by unchecked indexing when there is no byte to point at.
static NUL: u8 = 0;

/// A borrowed byte buffer seen through a [`Predicate`].
///
/// The view stores the raw slice and the predicate; it never copies the
/// buffer. Every query ([`size`](Self::size), indexing, iteration,
/// comparison) rescans the buffer, so the filtered content always reflects
/// what the predicate answers now.
///
/// Cloning a view aliases the same buffer and shares the same predicate.
///
/// ```rust
/// use filterview::FilteredStringView;
///
/// let s = String::from("only 90s kids understand");
/// let view = FilteredStringView::with_predicate(&s, |c| c == b'9' || c == b'0' || c == b' ');
///
/// assert_eq!(view.size(), 5);
/// assert_eq!(view[2], b'0');
/// assert_eq!(view.to_string(), " 90  ");
/// ```
#[derive(Clone, Default)]
pub struct FilteredStringView<'a> {
    data: Option<&'a [u8]>,
    predicate: Predicate<'a>,
}

impl<'a> FilteredStringView<'a> {
    /// Views the whole of `buffer` with the accept-all predicate.
    pub fn new<B>(buffer: &'a B) -> Self
    where
        B: AsRef<[u8]> + ?Sized,
    {
        Self::from_parts(buffer.as_ref(), Predicate::AcceptAll)
    }

    /// Views `buffer` through the closure `f`.
    pub fn with_predicate<B, F>(buffer: &'a B, f: F) -> Self
    where
        B: AsRef<[u8]> + ?Sized,
        F: Fn(u8) -> bool + Send + Sync + 'a,
    {
        Self::from_parts(buffer.as_ref(), Predicate::new(f))
    }

    /// Views `buffer` through an existing, possibly shared, predicate.
    pub fn with_filter<B>(buffer: &'a B, predicate: Predicate<'a>) -> Self
    where
        B: AsRef<[u8]> + ?Sized,
    {
        Self::from_parts(buffer.as_ref(), predicate)
    }

    /// Views a null-terminated buffer, up to but excluding the terminator.
    #[must_use]
    pub fn from_cstr(s: &'a CStr) -> Self {
        Self::from_parts(s.to_bytes(), Predicate::AcceptAll)
    }

    /// Views a null-terminated buffer through the closure `f`.
    pub fn from_cstr_with_predicate<F>(s: &'a CStr, f: F) -> Self
    where
        F: Fn(u8) -> bool + Send + Sync + 'a,
    {
        Self::from_parts(s.to_bytes(), Predicate::new(f))
    }

    /// Builds a view from an explicit raw range and predicate.
    #[must_use]
    pub fn from_parts(data: &'a [u8], predicate: Predicate<'a>) -> Self {
        Self {
            data: Some(data),
            predicate,
        }
    }

    /// Moves the contents out, leaving `self` as a default view with no
    /// buffer.
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// The borrowed raw buffer, ignoring the predicate.
    ///
    /// `None` only for a view that was default-constructed or moved out of.
    #[must_use]
    pub fn data(&self) -> Option<&'a [u8]> {
        self.data
    }

    /// Raw pointer to the first byte of the buffer, or null when there is
    /// no buffer. Useful for checking whether two views alias.
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.data.map_or(core::ptr::null(), <[u8]>::as_ptr)
    }

    /// Length of the raw buffer, not of the filtered content.
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.bytes().len()
    }

    /// The active predicate.
    #[must_use]
    pub fn predicate(&self) -> &Predicate<'a> {
        &self.predicate
    }

    /// Number of bytes for which the predicate holds. Scans the buffer.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes()
            .iter()
            .filter(|&&c| self.predicate.test(c))
            .count()
    }

    /// Returns `true` if no byte passes the predicate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.bytes().iter().any(|&c| self.predicate.test(c))
    }

    /// The `n`th visible byte, or `None` past the end.
    #[must_use]
    pub fn get(&self, n: usize) -> Option<&'a u8> {
        let bytes = self.bytes();
        bytes.iter().filter(|&&c| self.predicate.test(c)).nth(n)
    }

    /// The `index`th visible byte.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if `index` is negative or not below
    /// [`size`](Self::size).
    pub fn at(&self, index: isize) -> Result<&'a u8, RangeError> {
        let found = usize::try_from(index).ok().and_then(|n| self.get(n));
        found.ok_or_else(|| {
            log::trace!("at({index}) rejected, view has {} visible bytes", self.size());
            RangeError::new(index)
        })
    }

    /// Raw offsets of every visible byte, in order.
    #[must_use]
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.bytes()
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| self.predicate.test(c).then_some(i))
            .collect()
    }

    /// Copies the visible bytes into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.raw_len());
        out.extend(self.iter());
        out
    }

    /// Copies the visible bytes into a new byte string.
    #[must_use]
    pub fn to_bstring(&self) -> BString {
        BString::from(self.to_vec())
    }

    /// Iterates over the visible bytes.
    ///
    /// The iterator is double-ended: `iter().rev()` walks the filtered
    /// content from back to front.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.bytes(), &self.predicate)
    }

    /// Iterates over the visible bytes from back to front, the pass bounded
    /// by `rbegin`/`rend`.
    #[doc(alias = "rbegin")]
    #[doc(alias = "rend")]
    #[must_use]
    pub fn rev_iter(&self) -> Rev<Iter<'_>> {
        self.iter().rev()
    }

    /// Cursor at the first visible byte, or at [`end`](Self::end) if there
    /// is none.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, 'a> {
        let start = self
            .bytes()
            .iter()
            .position(|&c| self.predicate.test(c))
            .unwrap_or(self.raw_len());
        Cursor::new(self, start)
    }

    /// Cursor one past the last raw byte, whatever the predicate.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, 'a> {
        Cursor::new(self, self.raw_len())
    }

    /// Same buffer, different predicate.
    pub(crate) fn with_same_buffer(&self, predicate: Predicate<'a>) -> Self {
        Self {
            data: self.data,
            predicate,
        }
    }

    pub(crate) fn bytes(&self) -> &'a [u8] {
        self.data.unwrap_or_default()
    }
}

impl Index<usize> for FilteredStringView<'_> {
    type Output = u8;

    /// The `n`th visible byte.
    ///
    /// Out of range this does not panic: it yields the first raw byte of
    /// the buffer, or `0` when the buffer is empty. Use
    /// [`get`](FilteredStringView::get) or [`at`](FilteredStringView::at)
    /// to detect the miss.
    fn index(&self, n: usize) -> &u8 {
        self.get(n)
            .or_else(|| self.bytes().first())
            .unwrap_or(&NUL)
    }
}

impl<'v> IntoIterator for &'v FilteredStringView<'_> {
    type Item = u8;
    type IntoIter = Iter<'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> From<&'a str> for FilteredStringView<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s)
    }
}

impl<'a> From<&'a alloc::string::String> for FilteredStringView<'a> {
    fn from(s: &'a alloc::string::String) -> Self {
        Self::new(s)
    }
}

impl<'a> From<&'a [u8]> for FilteredStringView<'a> {
    fn from(s: &'a [u8]) -> Self {
        Self::new(s)
    }
}

impl<'a> From<&'a BStr> for FilteredStringView<'a> {
    fn from(s: &'a BStr) -> Self {
        Self::new(s)
    }
}

impl<'a> From<&'a CStr> for FilteredStringView<'a> {
    fn from(s: &'a CStr) -> Self {
        Self::from_cstr(s)
    }
}

impl From<&FilteredStringView<'_>> for Vec<u8> {
    fn from(view: &FilteredStringView<'_>) -> Self {
        view.to_vec()
    }
}

impl From<&FilteredStringView<'_>> for BString {
    fn from(view: &FilteredStringView<'_>) -> Self {
        view.to_bstring()
    }
}

impl<'b> PartialEq<FilteredStringView<'b>> for FilteredStringView<'_> {
    fn eq(&self, other: &FilteredStringView<'b>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for FilteredStringView<'_> {}

impl<'b> PartialOrd<FilteredStringView<'b>> for FilteredStringView<'_> {
    fn partial_cmp(&self, other: &FilteredStringView<'b>) -> Option<Ordering> {
        Some(self.iter().cmp(other.iter()))
    }
}

impl Ord for FilteredStringView<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Hash for FilteredStringView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self {
            state.write_u8(c);
        }
        state.write_usize(self.size());
    }
}

macro_rules! impl_eq_bytes {
    ($($rhs:ty),* $(,)?) => {
        $(
            impl PartialEq<$rhs> for FilteredStringView<'_> {
                fn eq(&self, other: &$rhs) -> bool {
                    let bytes: &[u8] = AsRef::<[u8]>::as_ref(other);
                    self.iter().eq(bytes.iter().copied())
                }
            }

            impl PartialEq<FilteredStringView<'_>> for $rhs {
                fn eq(&self, other: &FilteredStringView<'_>) -> bool {
                    other == self
                }
            }
        )*
    };
}

impl_eq_bytes!(str, &str, [u8], &[u8], alloc::string::String, BString, BStr);

impl fmt::Display for FilteredStringView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_bstring().as_bstr(), f)
    }
}

impl fmt::Debug for FilteredStringView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredStringView")
            .field("data", &self.data.map(|d| d.as_bstr()))
            .field("filtered", &self.to_bstring())
            .field("predicate", &self.predicate)
            .finish()
    }
}
