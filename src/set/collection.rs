//! The [`Set`] type and its core collection operations.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use super::DefaultHashBuilder;
use super::iter::SetIterator;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique values.
///
/// `Set` is a thin owner of a [`HashSet`]: each instance exclusively owns its
/// storage, and values copied out of a set (through [`Set::values`],
/// [`Clone`], or the algebra constructors) never alias it.
///
/// Iteration order is unspecified and may differ between two iterations of
/// the same set.
///
/// # Time Complexity
///
/// | Operation              | Complexity             |
/// |------------------------|------------------------|
/// | `add`                  | O(1) amortized         |
/// | `remove`               | O(1)                   |
/// | `contains`             | O(1)                   |
/// | `contains_all`         | O(k)                   |
/// | `contains_exactly`     | O(k)                   |
/// | `len`                  | O(1)                   |
/// | `values`               | O(n)                   |
/// | `union_with`           | O(sum of others)       |
/// | `intersection_with`    | O(n * others)          |
/// | `difference_with`      | O(n * others)          |
/// | `unique_with`          | O(n + sum of others)   |
///
/// # Examples
///
/// ```rust
/// use toolbox::set::Set;
///
/// let mut set = Set::new();
/// assert!(set.add("a"));
/// assert!(!set.add("a"));
///
/// assert!(set.contains(&"a"));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    pub(super) inner: HashSet<T, S>,
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set able to hold at least `capacity` elements
    /// without reallocating.
    ///
    /// The capacity is only a hint: the resulting set behaves exactly like
    /// one created with [`Set::new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a set containing the distinct values of `values`.
    ///
    /// Duplicates collapse into a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let set = Set::from_values(["a", "b", "c", "a"]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set which will use the given hash builder.
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hash_builder),
        }
    }

    /// Creates an empty set with at least the given capacity, using the
    /// given hash builder.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let set = set![1, 2, 2, 3];
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes all elements from the set, keeping its allocated capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let mut set = set!["a", "b", "c"];
    /// set.clear();
    /// assert_eq!(set.len(), 0);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the elements of the set, in unspecified
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let set = set![1, 2, 3];
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator::new(self.inner.iter())
    }
}

impl<T, S> Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was newly inserted and `false` if it was
    /// already present, in which case the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn add(&mut self, value: T) -> bool {
        self.inner.insert(value)
    }

    /// Removes a value from the set.
    ///
    /// Returns `true` if the value was present. Removing an absent value is
    /// a no-op returning `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let mut set = set![1, 2];
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(value)
    }

    /// Returns `true` if the set contains the value.
    ///
    /// The value may be any borrowed form of the element type, as long as
    /// `Hash` and `Eq` on the borrowed form match those of the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let set = set!["hello".to_string(), "world".to_string()];
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(value)
    }

    /// Returns `true` if every given value is in the set.
    ///
    /// An empty list of values is vacuously contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let set = set![1, 2, 3, 4];
    /// assert!(set.contains_all(&[1, 2, 3]));
    /// assert!(!set.contains_all(&[1, 2, 5]));
    ///
    /// let nothing: [i32; 0] = [];
    /// assert!(set.contains_all(&nothing));
    /// ```
    #[must_use]
    pub fn contains_all<'a, Q, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        values.into_iter().all(|value| self.inner.contains(value))
    }

    /// Returns `true` if the set holds exactly the given values, compared as
    /// unordered collections.
    ///
    /// Duplicates among `values` are ignored, so the check passes when the
    /// distinct given values and the set's elements are the same.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let set = set![1, 2, 3];
    /// assert!(set.contains_exactly(&[2, 3, 1]));
    /// assert!(set.contains_exactly(&[3, 3, 2, 1]));
    /// assert!(!set.contains_exactly(&[1, 2]));
    /// assert!(!set.contains_exactly(&[1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn contains_exactly<'a, Q, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        let mut distinct = HashSet::with_capacity(self.inner.len());
        for value in values {
            if !self.inner.contains(value) {
                return false;
            }
            distinct.insert(value);
        }
        distinct.len() == self.inner.len()
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let subset = set![1, 2];
    /// let superset = set![1, 2, 3];
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.inner.is_superset(&other.inner)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.inner.is_disjoint(&other.inner)
    }

    /// Reserves capacity for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    /// Shrinks the capacity of the set as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit();
    }
}

impl<T: Clone, S> Set<T, S> {
    /// Returns a snapshot of all elements, in unspecified order.
    ///
    /// The returned vector owns copies of the elements: changing it does not
    /// affect the set, and changing the set afterwards does not affect it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let set = set![3, 1, 2];
    /// let mut values = set.values();
    /// values.sort_unstable();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.inner.iter().cloned().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> PartialEq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T, S> Eq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: HashSet::from_iter(iter),
        }
    }
}

impl<T, S, const N: usize> From<[T; N]> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for Set<T, S>
where
    T: Hash + Eq + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

// =============================================================================
// Tests
// =============================================================================
