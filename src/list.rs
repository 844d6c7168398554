use crate::{insert::insert_in_order, iter::Iter};
use std::{
    borrow::Borrow,
    fmt::{Debug, Formatter},
};

/// A `Vec`-backed list kept sorted under `T`'s intrinsic ordering.
///
/// Unlike a set, equal elements may appear more than once. A newly inserted
/// element is placed in front of the elements it is equal to.
#[derive(Clone, PartialEq, Eq)]
pub struct SortedList<T> {
    elements: Vec<T>,
}

impl<T> SortedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Create an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Return how many elements are stored in this list.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Return `true` if this list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// View the elements as a sorted slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Return the smallest element, or `None` if the list is empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Return the greatest element, or `None` if the list is empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// An iterator visiting all elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.elements)
    }
}

impl<T: Ord> SortedList<T> {
    /// Insert `value` at the position that keeps the list sorted.
    ///
    /// If equal elements are already present, `value` lands in front of them.
    pub fn insert(&mut self, value: T) {
        insert_in_order(&mut self.elements, value);
    }

    /// Return the index of the first element equal to `value`, if any.
    pub fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let idx = self
            .elements
            .partition_point(|probe| probe.borrow() < value);

        match self.elements.get(idx) {
            Some(found) if found.borrow() == value => Some(idx),
            _ => None,
        }
    }

    /// Return `true` if `value` is present in this list.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(value).is_some()
    }

    /// Removes and returns the first element in the list, if any, that is
    /// equal to the given one.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let idx = self.position(value)?;
        Some(self.elements.remove(idx))
    }

    /// Removes the first element equal to `value` from the list. Returns
    /// whether such an element was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for SortedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: Ord> From<Vec<T>> for SortedList<T> {
    /// Sort `elements` (stable) to establish the invariant.
    fn from(mut elements: Vec<T>) -> Self {
        elements.sort();
        Self { elements }
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
