//! The sequence container.
//!
//! A [`Sequence`] stores a head pointer and a length. Everything else lives in
//! the chain of [`Link`]s, each exclusively owning the next.
//!
//! # Invariants
//!
//! Before and after every public call:
//!
//! - `len` equals the number of links reachable from `head`
//! - the chain is finite and the last link's `next` is `None`
//! - `head` is `None` exactly when `len == 0`
//!
//! Positional operations walk from the head; nothing caches a tail pointer or
//! an index, so the O(n) costs in the method docs are real.
//!
//! # Example
//!
//! ```
//! use nexus_sequence::Sequence;
//!
//! let mut seq: Sequence<u64> = Sequence::new();
//! seq.append(1);
//! seq.append(3);
//! seq.insert(1, 2).unwrap();
//!
//! assert_eq!(seq.get(1), Ok(&2));
//! assert_eq!(seq.to_vec(), vec![1, 2, 3]);
//!
//! seq.reverse();
//! assert_eq!(seq.to_vec(), vec![3, 2, 1]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Add, Index, IndexMut};

use crate::OutOfRange;
use crate::link::{Link, release_chain, tail_slot};

/// A singly-linked sequence that owns its links.
///
/// See the [module documentation](self) for the invariants.
pub struct Sequence<T> {
    pub(crate) head: Option<Box<Link<T>>>,
    pub(crate) len: usize,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        release_chain(self.head.take());
    }
}

// =============================================================================
// Construction and ownership
// =============================================================================

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Moves the whole chain out, leaving `self` empty.
    ///
    /// ```
    /// use nexus_sequence::Sequence;
    ///
    /// let mut a = Sequence::from([1, 2]);
    /// let b = a.take();
    ///
    /// assert!(a.is_empty());
    /// assert!(a.head_link().is_none());
    /// assert_eq!(b.len(), 2);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0 || self.head.is_none()
    }

    // ========================================================================
    // Link handles
    // ========================================================================

    /// Returns the first link, or `None` if empty.
    #[inline]
    pub fn head_link(&self) -> Option<&Link<T>> {
        self.head.as_deref()
    }

    /// Returns the last link, or `None` if empty.
    ///
    /// There is no cached tail: this walks the whole chain, O(n).
    pub fn tail_link(&self) -> Option<&Link<T>> {
        let mut link = self.head.as_deref()?;
        while let Some(next) = link.next.as_deref() {
            link = next;
        }
        Some(link)
    }

    fn link_at(&self, index: usize) -> Option<&Link<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    fn link_at_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }

    /// Returns the slot holding position `index`, or the empty slot past the
    /// tail when `index >= len`.
    fn slot_mut(&mut self, index: usize) -> &mut Option<Box<Link<T>>> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            match slot {
                Some(link) => slot = &mut link.next,
                None => break,
            }
        }
        slot
    }

    // ========================================================================
    // Indexed access
    // ========================================================================

    /// Returns a reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.link_at(index)
            .map(Link::value)
            .ok_or_else(|| OutOfRange::index("get", index, self.len))
    }

    /// Returns a mutable reference to the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.link_at_mut(index)
            .map(|link| &mut link.value)
            .ok_or_else(|| OutOfRange::index("get_mut", index, len))
    }

    /// Overwrites the element at `index`, returning the previous value.
    ///
    /// Length and chain shape are unchanged. O(index).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn update(&mut self, index: usize, value: T) -> Result<T, OutOfRange> {
        let len = self.len;
        match self.link_at_mut(index) {
            Some(link) => Ok(mem::replace(&mut link.value, value)),
            None => Err(OutOfRange::index("update", index, len)),
        }
    }

    /// Returns a reference to the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(Link::value)
    }

    /// Returns a mutable reference to the first element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|link| &mut link.value)
    }

    /// Returns a reference to the last element. O(n).
    pub fn back(&self) -> Option<&T> {
        self.tail_link().map(Link::value)
    }

    /// Returns a mutable reference to the last element. O(n).
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len.checked_sub(1)?;
        self.link_at_mut(last).map(|link| &mut link.value)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts at the head. O(1).
    #[inline]
    pub fn push_front(&mut self, value: T) {
        let mut link = Link::new(value);
        link.next = self.head.take();
        self.head = Some(link);
        self.len += 1;
    }

    /// Inserts at the end. O(n): walks to the last link.
    pub fn append(&mut self, value: T) {
        *tail_slot(&mut self.head) = Some(Link::new(value));
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == 0` inserts at the head, `index == len` at the end. Existing
    /// links are rewired, never moved. O(index).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index > len`; `value` is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_sequence::Sequence;
    ///
    /// let mut seq = Sequence::from([1, 2, 3]);
    /// seq.insert(1, 4).unwrap();
    /// assert_eq!(seq.to_vec(), vec![1, 4, 2, 3]);
    ///
    /// assert!(seq.insert(6, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        if index > self.len {
            return Err(OutOfRange::index("insert", index, self.len));
        }

        let slot = self.slot_mut(index);
        let mut link = Link::new(value);
        link.next = slot.take();
        *slot = Some(link);
        self.len += 1;
        Ok(())
    }

    /// Moves every link of `other` onto the end of `self`, leaving `other`
    /// empty. Nothing is copied or reallocated. O(len of `self`).
    pub fn append_sequence(&mut self, other: &mut Self) {
        *tail_slot(&mut self.head) = other.head.take();
        self.len += mem::take(&mut other.len);
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the first element. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|link| {
            let Link { value, next } = *link;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Removes and returns the element at `index`. O(index).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfRange> {
        let len = self.len;
        let slot = self.slot_mut(index);
        let link = slot
            .take()
            .ok_or_else(|| OutOfRange::index("remove", index, len))?;

        let Link { value, next } = *link;
        *slot = next;
        self.len -= 1;
        Ok(value)
    }

    /// Releases every link. Idempotent.
    pub fn clear(&mut self) {
        if self.len > 0 {
            trace!(len = self.len, "clearing sequence");
        }
        release_chain(self.head.take());
        self.len = 0;
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Exchanges the values at `i` and `j`. Links stay where they are.
    ///
    /// `i == j` is a no-op once both are known to be in range.
    /// O(max(i, j)).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] for the first of `i`, `j` that is `>= len`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), OutOfRange> {
        for index in [i, j] {
            if index >= self.len {
                return Err(OutOfRange::index("swap", index, self.len));
            }
        }
        if i == j {
            return Ok(());
        }

        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        if let Some(first) = self.link_at_mut(lo) {
            let Link { value: low, next } = first;
            let mut cursor = next.as_deref_mut();
            for _ in lo + 1..hi {
                cursor = cursor.and_then(|link| link.next.as_deref_mut());
            }
            if let Some(high) = cursor {
                mem::swap(low, &mut high.value);
            }
        }
        Ok(())
    }

    /// Reverses the chain in place. O(n) time, O(1) extra space.
    ///
    /// The former tail becomes the head.
    pub fn reverse(&mut self) {
        trace!(len = self.len, "reversing sequence");

        let mut reversed: Option<Box<Link<T>>> = None;
        let mut current = self.head.take();
        while let Some(mut link) = current {
            current = link.next.take();
            link.next = reversed;
            reversed = Some(link);
        }
        self.head = reversed;
    }
}

// =============================================================================
// Equality-based queries
// =============================================================================

impl<T: PartialEq> Sequence<T> {
    /// Returns the first link holding `value`, or `None`. O(n).
    pub fn find(&self, value: &T) -> Option<&Link<T>> {
        let mut current = self.head.as_deref();
        while let Some(link) = current {
            if link.value == *value {
                return Some(link);
            }
            current = link.next.as_deref();
        }
        None
    }

    /// Returns `true` if any element equals `value`. O(n).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Counts elements equal to `value`. O(n).
    pub fn count(&self, value: &T) -> i64 {
        self.iter().filter(|v| *v == value).count() as i64
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None` (and changes nothing) if no element matches. O(n).
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let index = self.iter().position(|v| v == value)?;
        self.remove(index).ok()
    }
}

// =============================================================================
// Copying conversions
// =============================================================================

impl<T: Clone> Sequence<T> {
    /// Copies every value into a new `Vec`, in order. O(n).
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copies every value into a new fixed-size buffer owned by the caller.
    ///
    /// An empty sequence yields an empty slice. O(n).
    pub fn to_boxed_slice(&self) -> Box<[T]> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T: Clone> From<&Vec<T>> for Sequence<T> {
    fn from(values: &Vec<T>) -> Self {
        Self::from(values.as_slice())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Clone> Add for &Sequence<T> {
    type Output = Sequence<T>;

    /// Deep-copies `self` followed by `rhs`. Neither operand changes.
    fn add(self, rhs: Self) -> Sequence<T> {
        trace!(left = self.len, right = rhs.len, "concatenating sequences");
        let mut out = self.clone();
        out.extend(rhs.iter().cloned());
        out
    }
}

impl<T> Add for Sequence<T> {
    type Output = Sequence<T>;

    /// Relinks `rhs` onto the tail of `self` without copying.
    fn add(mut self, mut rhs: Self) -> Sequence<T> {
        trace!(left = self.len, right = rhs.len, "concatenating sequences");
        self.append_sequence(&mut rhs);
        self
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
