//! Singly-linked sequence with exclusively owned links.
//!
//! [`Sequence<T>`] is an ordered, mutable container with list semantics:
//! O(1) insertion and removal at the head, O(n) positional access. Each
//! [`Link`] owns the next one, so the whole chain has exactly one owner and
//! no link can ever be reachable from two sequences.
//!
//! # Quick Start
//!
//! ```
//! use nexus_sequence::Sequence;
//!
//! let mut seq = Sequence::from([1, 2, 3]);
//!
//! seq.insert(1, 4).unwrap();
//! assert_eq!(seq.to_vec(), vec![1, 4, 2, 3]);
//!
//! assert_eq!(seq.remove_value(&2), Some(2));
//! assert_eq!(seq.len(), 3);
//!
//! // Positions past the end are rejected, not clamped
//! assert!(seq.get(3).is_err());
//! ```
//!
//! # Ownership Model
//!
//! ```text
//! Sequence ──head──> Link ──next──> Link ──next──> Link ──next──> None
//!            (Box)          (Box)          (Box)
//! ```
//!
//! - `Clone` deep-copies every link; the copy shares nothing with the source
//! - Moving a sequence moves the head pointer; [`Sequence::take`] leaves an
//!   empty sequence behind
//! - Dropping releases the chain front to back, iteratively, so teardown
//!   never recurses once per link
//!
//! [`Link`] is only ever handed out by shared reference. It is a read and
//! traverse handle, never a way to take ownership of part of the chain.
//!
//! # Complexity
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `push_front` / `pop_front` | O(1) | |
//! | `len` / `is_empty` | O(1) | length is stored |
//! | `get` / `update` / `insert` / `remove` | O(index) | walks from head |
//! | `append` / `tail_link` / `back` | O(n) | no cached tail |
//! | `swap(i, j)` | O(max(i, j)) | swaps values, not links |
//! | `reverse` | O(n) | in place, O(1) extra space |
//! | `find` / `count` / `remove_value` | O(n) | |
//!
//! # Errors
//!
//! [`OutOfRange`] is the only error. It is returned synchronously by the call
//! that received the bad index or range. Indexing with `seq[i]` panics with
//! the same message instead.
//!
//! # Feature Flags
//!
//! - `tracing` (default) - emit `tracing` events for rejected positions and
//!   bulk structural operations. No subscriber is installed by this crate.

#![warn(missing_docs)]

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    }};
}

mod display;
pub mod error;
pub mod iter;
mod link;
pub mod sequence;

pub use display::DisplayRange;
pub use error::OutOfRange;
pub use iter::{IntoIter, Iter, IterMut};
pub use link::Link;
pub use sequence::Sequence;
