//! Iterators over a [`Sequence`], and bulk construction from iterators.

use std::iter::FusedIterator;

use crate::link::{Link, tail_slot};
use crate::Sequence;

impl<T> Sequence<T> {
    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over mutable references to elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            remaining: self.len,
            next: self.head.as_deref_mut(),
        }
    }
}

// =============================================================================
// Iter
// =============================================================================

/// Iterator over references to sequence elements.
pub struct Iter<'a, T> {
    next: Option<&'a Link<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|link| {
            self.next = link.next.as_deref();
            self.remaining -= 1;
            &link.value
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// IterMut
// =============================================================================

/// Iterator over mutable references to sequence elements.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Link<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|link| {
            self.next = link.next.as_deref_mut();
            self.remaining -= 1;
            &mut link.value
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

// =============================================================================
// IntoIter
// =============================================================================

/// Owning iterator; pops from the front.
///
/// Elements not yet yielded are released when the iterator is dropped.
pub struct IntoIter<T> {
    seq: Sequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len, Some(self.seq.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { seq: self }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

// =============================================================================
// Bulk construction
// =============================================================================

impl<T> Extend<T> for Sequence<T> {
    /// Appends every item in order, walking to the tail once. O(len + items).
    ///
    /// The length is bumped per link, so a panicking iterator leaves every
    /// link appended so far owned and counted.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let Self { head, len } = self;
        let mut slot = tail_slot(head);
        for value in iter {
            slot = &mut slot.insert(Link::new(value)).next;
            *len += 1;
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_front_to_back() {
        let seq = Sequence::from([1, 2, 3]);
        let values: Vec<_> = seq.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn iter_is_exact_size() {
        let seq = Sequence::from([1, 2, 3]);
        let mut iter = seq.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn iter_on_empty() {
        let seq: Sequence<u64> = Sequence::new();
        assert!(seq.iter().next().is_none());
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut seq = Sequence::from([1, 2, 3]);
        for value in seq.iter_mut() {
            *value *= 10;
        }
        assert_eq!(seq.to_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn for_loops_over_references() {
        let mut seq = Sequence::from([1, 2, 3]);
        for value in &mut seq {
            *value += 1;
        }

        let mut sum = 0;
        for value in &seq {
            sum += value;
        }
        assert_eq!(sum, 9);
    }

    #[test]
    fn into_iter_yields_owned_values() {
        let seq = Sequence::from([String::from("a"), String::from("b")]);
        let values: Vec<String> = seq.into_iter().collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn into_iter_partial_then_drop() {
        let seq = Sequence::from([String::from("a"), String::from("b"), String::from("c")]);
        let mut iter = seq.into_iter();
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.len(), 2);
        drop(iter);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut seq = Sequence::from([1, 2]);
        seq.extend([3, 4]);
        seq.extend(&[5, 6]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(seq.len(), 6);
    }

    #[test]
    fn extend_empty_into_empty() {
        let mut seq: Sequence<u64> = Sequence::new();
        seq.extend(std::iter::empty::<u64>());
        assert!(seq.is_empty());
        assert!(seq.head_link().is_none());
    }

    #[test]
    fn collect_from_range() {
        let seq: Sequence<u32> = (0..5).collect();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn extend_survives_panicking_iterator() {
        let mut seq = Sequence::from([0]);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            seq.extend((1..10).map(|v| if v == 4 { panic!("boom") } else { v }));
        }));
        assert!(result.is_err());

        assert_eq!(seq.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(seq.len(), 4);
    }
}
