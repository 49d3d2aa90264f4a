use alloc::sync::Arc;
use core::fmt;

type Callback<'a> = dyn Fn(u8) -> bool + Send + Sync + 'a;

/// Decides which bytes of a buffer are visible through a view.
///
/// A predicate is either the built-in accept-all predicate or a shared
/// closure. Cloning is cheap: closures are reference counted, so a view and
/// every view derived from it call the same closure instance, including any
/// state it captured.
///
/// Closures must be `Send + Sync`, so views can be shared across threads.
/// A predicate that keeps state between calls therefore cannot capture
/// `Cell`, `RefCell` or `Rc`; use atomics or a lock instead.
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use filterview::Predicate;
///
/// let digits = Predicate::new(|c| c.is_ascii_digit());
/// assert!(digits.test(b'7'));
/// assert!(!digits.test(b'x'));
/// assert!(Predicate::accept_all().test(b'x'));
///
/// // Every other call is accepted.
/// let calls = AtomicUsize::new(0);
/// let alternating = Predicate::new(|_| calls.fetch_add(1, Ordering::Relaxed) % 2 == 0);
/// assert!(alternating.test(b'a'));
/// assert!(!alternating.test(b'a'));
/// ```
#[derive(Clone, Default)]
pub enum Predicate<'a> {
    /// Every byte is visible.
    #[default]
    AcceptAll,
    /// Visibility is decided by a caller-provided closure.
    Custom(Arc<Callback<'a>>),
}

impl<'a> Predicate<'a> {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(u8) -> bool + Send + Sync + 'a,
    {
        Predicate::Custom(Arc::new(f))
    }

    /// The predicate used when a view is built without one.
    #[must_use]
    pub fn accept_all() -> Self {
        Predicate::AcceptAll
    }

    /// Returns `true` if the byte is visible.
    #[inline]
    #[must_use]
    pub fn test(&self, c: u8) -> bool {
        match self {
            Predicate::AcceptAll => true,
            Predicate::Custom(f) => f(c),
        }
    }

    /// Returns `true` for the built-in accept-all predicate.
    ///
    /// A closure that happens to accept everything is still `Custom`.
    #[must_use]
    pub fn is_accept_all(&self) -> bool {
        matches!(self, Predicate::AcceptAll)
    }

    /// Logical AND of `self` followed by every predicate in `rest`,
    /// evaluated left to right and stopping at the first rejection.
    ///
    /// Accept-all operands are dropped; if nothing else remains the result
    /// is accept-all.
    #[must_use]
    pub fn and_all<I>(self, rest: I) -> Self
    where
        I: IntoIterator<Item = Predicate<'a>>,
    {
        let mut chain: alloc::vec::Vec<Predicate<'a>> = core::iter::once(self)
            .chain(rest)
            .filter(|p| !p.is_accept_all())
            .collect();

        match chain.len() {
            0 => Predicate::AcceptAll,
            1 => chain.pop().unwrap_or_default(),
            _ => Predicate::new(move |c| chain.iter().all(|p| p.test(c))),
        }
    }
}

impl fmt::Debug for Predicate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::AcceptAll => f.write_str("AcceptAll"),
            Predicate::Custom(_) => f.write_str("Custom"),
        }
    }
}

impl<'a, F> From<F> for Predicate<'a>
where
    F: Fn(u8) -> bool + Send + Sync + 'a,
{
    fn from(f: F) -> Self {
        Predicate::new(f)
    }
}
