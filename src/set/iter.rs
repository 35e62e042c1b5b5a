//! Borrowing and owning iterators over a [`Set`].

use std::collections::hash_set;
use std::iter::FusedIterator;

use super::Set;

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`], in unspecified order.
///
/// Created by [`Set::iter`].
#[derive(Clone)]
pub struct SetIterator<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> SetIterator<'a, T> {
    pub(super) const fn new(inner: hash_set::Iter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIterator<'_, T> {}

/// An owning iterator over the elements of a [`Set`], in unspecified order.
pub struct SetIntoIterator<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIntoIterator<T> {}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
