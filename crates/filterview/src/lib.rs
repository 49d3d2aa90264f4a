//! Non-owning, predicate-filtered views over byte strings.
//!
//! A [`FilteredStringView`] borrows a byte buffer owned elsewhere and exposes
//! only the bytes for which its [`Predicate`] holds. Nothing is copied when a
//! view is built, cloned, composed with further predicates or narrowed with
//! [`substr`]; the filtered content is recomputed from the buffer on demand.
//!
//! ```rust
//! use filterview::{FilteredStringView, compose, split, substr, Predicate};
//!
//! let text = "c / c++";
//! let view = compose(
//!     &FilteredStringView::new(text),
//!     [Predicate::new(|c| c != b' ')],
//! );
//! assert_eq!(view, "c/c++");
//! assert_eq!(substr(&view, 2, 0), "c++");
//!
//! let parts = split(&view, &FilteredStringView::new("/"));
//! assert_eq!(parts.to_vec(), ["c", "c++"]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod compose;
mod error;
mod iter;
mod predicate;
mod split;
mod substr;
mod view;

#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(test)]
mod tests;

pub use compose::compose;
pub use error::RangeError;
pub use iter::{Cursor, Iter};
pub use predicate::Predicate;
pub use split::{SplitIter, SplitParts, split};
pub use substr::substr;
pub use view::FilteredStringView;
