//! A single node of the chain.

use std::fmt;

/// One value plus exclusive ownership of the next link.
///
/// Links are created and destroyed only by their [`Sequence`](crate::Sequence).
/// Callers get `&Link<T>` from [`head_link`](crate::Sequence::head_link),
/// [`tail_link`](crate::Sequence::tail_link) and
/// [`find`](crate::Sequence::find), and can walk forward with [`next`](Self::next).
///
/// # Example
///
/// ```
/// use nexus_sequence::Sequence;
///
/// let seq = Sequence::from([1, 2, 3]);
///
/// let mut values = Vec::new();
/// let mut link = seq.head_link();
/// while let Some(l) = link {
///     values.push(*l.value());
///     link = l.next();
/// }
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub struct Link<T> {
    pub(crate) value: T,
    pub(crate) next: Option<Box<Link<T>>>,
}

impl<T> Link<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(Self { value, next: None })
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the following link, or `None` if this is the tail.
    #[inline]
    pub fn next(&self) -> Option<&Link<T>> {
        self.next.as_deref()
    }

    /// Returns `true` if no link follows this one.
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }
}

// Only the value: formatting the rest of the chain belongs to the sequence.
impl<T: fmt::Debug> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("value", &self.value)
            .field("is_tail", &self.is_tail())
            .finish()
    }
}

/// Walks from `slot` to the empty slot past the last link.
#[inline]
pub(crate) fn tail_slot<T>(mut slot: &mut Option<Box<Link<T>>>) -> &mut Option<Box<Link<T>>> {
    while let Some(link) = slot {
        slot = &mut link.next;
    }
    slot
}

/// Releases a chain front to back without recursing per link.
pub(crate) fn release_chain<T>(mut current: Option<Box<Link<T>>>) {
    while let Some(mut link) = current {
        current = link.next.take();
    }
}
