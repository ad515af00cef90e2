// nexus-sequence/src/error.rs

//! Error type for positional operations.

use thiserror::Error;

/// An index or range that does not fit the sequence it was applied to.
///
/// This is the only failure a [`Sequence`](crate::Sequence) reports. Searching
/// for a missing value or querying an empty sequence is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutOfRange {
    /// A single position outside the valid bounds.
    #[error("index {index} out of range for sequence of length {len}")]
    Index {
        /// The rejected position.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
    /// A `start..end` window that is empty-start, overruns, or is inverted.
    #[error("range {start}..{end} out of range for sequence of length {len}")]
    Range {
        /// Requested first position.
        start: usize,
        /// Requested end position (exclusive).
        end: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

impl OutOfRange {
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub(crate) fn index(op: &'static str, index: usize, len: usize) -> Self {
        debug!(op, index, len, "index out of range");
        Self::Index { index, len }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub(crate) fn range(op: &'static str, start: usize, end: usize, len: usize) -> Self {
        debug!(op, start, end, len, "range out of range");
        Self::Range { start, end, len }
    }

    /// Length of the sequence when the error was raised.
    pub fn sequence_len(&self) -> usize {
        match *self {
            Self::Index { len, .. } | Self::Range { len, .. } => len,
        }
    }
}
