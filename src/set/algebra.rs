//! Union, intersection, difference and symmetric difference over any number
//! of sets.
//!
//! Every operation comes as a mutator (`*_with`, changes only the receiver)
//! and as a constructor (`*_of`, builds a new set and leaves all inputs
//! untouched). Constructors accept the same set several times; each
//! occurrence counts as a separate input.
//!
//! A set can never be passed as one of its own `others`: the receiver is
//! borrowed mutably, so the borrow checker rejects `set.union_with([&set])`.
//! To combine a set with itself, pass a clone.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::Set;

impl<T, S> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    /// Returns a copy of `set` with freshly allocated storage.
    fn copy_of(set: &Self) -> Self {
        let mut copy = Self::with_capacity_and_hasher(set.len(), S::default());
        copy.inner.extend(set.inner.iter().cloned());
        copy
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Adds every element of every set in `others` to `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let mut set_a = set![1, 2, 3, 4];
    /// set_a.union_with([&set![3, 6]]);
    /// assert_eq!(set_a.to_string(), "(Set[i32]: [1 2 3 4 6])");
    ///
    /// let mut set_b = set![3, 6];
    /// set_b.union_with([&set![3, 1, 5], &set![3, 4]]);
    /// assert_eq!(set_b.to_string(), "(Set[i32]: [1 3 4 5 6])");
    /// ```
    pub fn union_with<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        let _span = trace_span!("union_with");
        for other in others {
            self.inner.extend(other.inner.iter().cloned());
        }
        trace!(output = self.len(), "union_with finished");
    }

    /// Removes from `self` every element that is missing from at least one
    /// set in `others`.
    ///
    /// With no other sets, `self` is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let mut set_a = set![1, 2, 3, 4];
    /// set_a.intersection_with([&set![3, 2, 5]]);
    /// assert_eq!(set_a.to_string(), "(Set[i32]: [2 3])");
    ///
    /// let mut set_b = set![3, 2, 5];
    /// set_b.intersection_with([&set![3, 1, 5], &set![3, 4]]);
    /// assert_eq!(set_b.to_string(), "(Set[i32]: [3])");
    /// ```
    pub fn intersection_with<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        let others: Vec<&Self> = others.into_iter().collect();
        let _span = trace_span!("intersection_with", others = others.len());
        if others.is_empty() {
            return;
        }

        self.inner
            .retain(|value| others.iter().all(|other| other.inner.contains(value)));
        trace!(output = self.len(), "intersection_with finished");
    }

    /// Removes from `self` every element that is present in any set in
    /// `others`.
    ///
    /// The receiver is scanned once against all other sets, which gives the
    /// same result as subtracting the sets one after another.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let mut set = set![1, 2, 3, 4];
    /// set.difference_with([&set![3, 6], &set![4, 7]]);
    /// assert_eq!(set.to_string(), "(Set[i32]: [1 2])");
    /// ```
    pub fn difference_with<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        let others: Vec<&Self> = others.into_iter().filter(|other| !other.is_empty()).collect();
        let _span = trace_span!("difference_with", others = others.len());
        if others.is_empty() {
            return;
        }

        self.inner
            .retain(|value| !others.iter().any(|other| other.inner.contains(value)));
        trace!(output = self.len(), "difference_with finished");
    }

    /// Turns `self` into the set of elements that occur in exactly one of
    /// `self` and the sets in `others`.
    ///
    /// With no other sets, `self` is left unchanged.
    ///
    /// Occurrences across `others` are counted in one pass before `self` is
    /// touched. An element of `self` occurs exactly once iff no other set
    /// holds it; any other element occurs exactly once iff its count is 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    ///
    /// let mut set_a = set![1, 2, 3, 4];
    /// set_a.unique_with([&set![3, 6]]);
    /// assert_eq!(set_a.to_string(), "(Set[i32]: [1 2 4 6])");
    ///
    /// let mut set_c = set![3, 1, 5];
    /// let snapshot = set_c.clone();
    /// set_c.unique_with([&snapshot, &set![3, 4]]);
    /// assert_eq!(set_c.to_string(), "(Set[i32]: [4])");
    /// ```
    pub fn unique_with<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        let _span = trace_span!("unique_with");
        let mut occurrences: HashMap<&T, usize, S> = HashMap::default();
        let mut has_others = false;

        for other in others {
            has_others = true;
            for value in &other.inner {
                *occurrences.entry(value).or_insert(0) += 1;
            }
        }

        if !has_others {
            return;
        }

        let additions: Vec<T> = occurrences
            .iter()
            .filter(|&(value, &count)| count == 1 && !self.inner.contains(*value))
            .map(|(value, _)| T::clone(value))
            .collect();

        self.inner.retain(|value| !occurrences.contains_key(value));
        self.inner.extend(additions);
        trace!(output = self.len(), "unique_with finished");
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a new set containing every element of every given set.
    ///
    /// No sets give an empty set; a single set gives a copy of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    /// use toolbox::set::Set;
    ///
    /// let set_a = set![1, 2, 3, 4];
    /// let set_b = set![3, 6];
    /// let set_c = set![4, 7];
    ///
    /// let union = Set::union_of([&set_a, &set_b, &set_c]);
    /// assert_eq!(union.to_string(), "(Set[i32]: [1 2 3 4 6 7])");
    ///
    /// // Originals are not modified
    /// assert_eq!(set_a.to_string(), "(Set[i32]: [1 2 3 4])");
    /// ```
    #[must_use]
    pub fn union_of<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        let sets: Vec<&Self> = sets.into_iter().collect();
        let _span = trace_span!("union_of", inputs = sets.len());

        let capacity = sets.iter().map(|set| set.len()).max().unwrap_or(0);
        let mut result = Self::with_capacity_and_hasher(capacity, S::default());
        for set in &sets {
            result.inner.extend(set.inner.iter().cloned());
        }

        trace!(output = result.len(), "union_of finished");
        result
    }

    /// Creates a new set containing the elements present in all given sets.
    ///
    /// No sets give an empty set; a single set gives a copy of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    /// use toolbox::set::Set;
    ///
    /// let set_a = set![1, 2, 3, 4];
    /// let set_b = set![3, 2, 5];
    /// let set_c = set![3, 1, 5];
    ///
    /// assert_eq!(Set::intersection_of([&set_a, &set_b]).to_string(), "(Set[i32]: [2 3])");
    /// assert_eq!(Set::intersection_of([&set_b, &set_c]).to_string(), "(Set[i32]: [3 5])");
    /// assert_eq!(Set::intersection_of([&set_a, &set_b, &set_c]).to_string(), "(Set[i32]: [3])");
    /// ```
    #[must_use]
    pub fn intersection_of<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        let sets: Vec<&Self> = sets.into_iter().collect();
        let _span = trace_span!("intersection_of", inputs = sets.len());

        // Every element of the result is in the smallest set
        let Some(smallest) = sets.iter().copied().min_by_key(|set| set.len()) else {
            return Self::default();
        };

        let mut result = Self::with_capacity_and_hasher(smallest.len(), S::default());
        result.inner.extend(
            smallest
                .inner
                .iter()
                .filter(|value| sets.iter().all(|set| set.inner.contains(*value)))
                .cloned(),
        );

        trace!(output = result.len(), "intersection_of finished");
        result
    }

    /// Creates a new set containing the elements of the first set that are
    /// absent from all the following sets.
    ///
    /// No sets give an empty set; a single set gives a copy of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    /// use toolbox::set::Set;
    ///
    /// let set_a = set![1, 2, 3, 4];
    /// let set_b = set![3, 6];
    /// let set_c = set![4, 7];
    ///
    /// assert_eq!(Set::difference_of([&set_a, &set_b]).to_string(), "(Set[i32]: [1 2 4])");
    /// assert_eq!(Set::difference_of([&set_a, &set_b, &set_c]).to_string(), "(Set[i32]: [1 2])");
    /// ```
    #[must_use]
    pub fn difference_of<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        let sets: Vec<&Self> = sets.into_iter().collect();
        let _span = trace_span!("difference_of", inputs = sets.len());

        let Some((first, rest)) = sets.split_first() else {
            return Self::default();
        };

        let mut result = Self::with_capacity_and_hasher(first.len(), S::default());
        result.inner.extend(
            first
                .inner
                .iter()
                .filter(|value| !rest.iter().any(|set| set.inner.contains(*value)))
                .cloned(),
        );

        trace!(output = result.len(), "difference_of finished");
        result
    }

    /// Creates a new set containing the elements that occur in exactly one
    /// of the given sets.
    ///
    /// No sets give an empty set; a single set gives a copy of it. Passing
    /// the same set twice counts its elements twice.
    ///
    /// Each element is counted once per set containing it, in a single pass
    /// over all inputs; elements with a count of 1 are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    /// use toolbox::set::Set;
    ///
    /// let set_a = set![1, 2, 3, 4];
    /// let set_b = set![3, 6];
    /// let set_c = set![4, 7];
    ///
    /// assert_eq!(Set::unique_of([&set_a, &set_b]).to_string(), "(Set[i32]: [1 2 4 6])");
    /// assert_eq!(Set::unique_of([&set_b, &set_c]).to_string(), "(Set[i32]: [3 4 6 7])");
    /// assert_eq!(Set::unique_of([&set_c, &set_a]).to_string(), "(Set[i32]: [1 2 3 7])");
    /// assert_eq!(Set::unique_of([&set_a, &set_b, &set_c]).to_string(), "(Set[i32]: [1 2 6 7])");
    /// ```
    #[must_use]
    pub fn unique_of<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        let sets: Vec<&Self> = sets.into_iter().collect();
        let _span = trace_span!("unique_of", inputs = sets.len());

        let result = match sets.as_slice() {
            [] => Self::default(),
            [only] => Self::copy_of(only),
            [first, ..] => {
                let mut occurrences: HashMap<&T, usize, S> =
                    HashMap::with_capacity_and_hasher(first.len(), S::default());
                for set in sets.iter().copied() {
                    for value in &set.inner {
                        *occurrences.entry(value).or_insert(0) += 1;
                    }
                }

                occurrences
                    .into_iter()
                    .filter(|&(_, count)| count == 1)
                    .map(|(value, _)| value.clone())
                    .collect()
            }
        };

        trace!(output = result.len(), "unique_of finished");
        result
    }

    /// Computes the same set as [`Set::unique_of`] by folding the inputs one
    /// at a time instead of counting occurrences.
    ///
    /// After each step, the result holds the elements seen exactly once so
    /// far: elements of the next set that were unique are removed, and
    /// elements never seen before are added. Every step builds intermediate
    /// sets, so this is slower than [`Set::unique_of`] for more than two
    /// inputs. It is kept as a benchmark baseline and a cross-check.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolbox::set;
    /// use toolbox::set::Set;
    ///
    /// let sets = [set![1, 2, 3, 4], set![3, 6], set![4, 7]];
    /// assert_eq!(
    ///     Set::unique_of_pairwise(&sets),
    ///     Set::unique_of(&sets),
    /// );
    /// ```
    #[must_use]
    pub fn unique_of_pairwise<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        let mut sets = sets.into_iter();
        let _span = trace_span!("unique_of_pairwise");

        let Some(first) = sets.next() else {
            return Self::default();
        };

        let mut unique = Self::copy_of(first);
        let mut seen = Self::copy_of(first);

        for set in sets {
            let fresh = Self::difference_of([set, &seen]);
            unique.difference_with([set]);
            unique.union_with([&fresh]);
            seen.union_with([set]);
        }

        trace!(output = unique.len(), "unique_of_pairwise finished");
        unique
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set;
    use rstest::{fixture, rstest};

    /// The three sets used throughout the worked examples.
    #[fixture]
    fn abc() -> [Set<i32>; 3] {
        [set![1, 2, 3, 4], set![3, 6], set![4, 7]]
    }

    // =========================================================================
    // Union
    // =========================================================================

    #[rstest]
    fn test_union_of_worked_examples(abc: [Set<i32>; 3]) {
        let [a, b, c] = &abc;

        assert_eq!(Set::union_of([a, b]), set![1, 2, 3, 4, 6]);
        assert_eq!(Set::union_of([c, a]), set![1, 2, 3, 4, 7]);
        assert_eq!(Set::union_of([a, b, c]), set![1, 2, 3, 4, 6, 7]);
    }

    #[rstest]
    fn test_union_with_no_others_is_noop() {
        let mut set = set!["a", "b"];
        let none: [&Set<&str>; 0] = [];
        set.union_with(none);
        assert_eq!(set, set!["a", "b"]);
    }

    // =========================================================================
    // Intersection
    // =========================================================================

    #[rstest]
    fn test_intersection_with_empty_other_clears() {
        let mut set = set![1, 2];
        set.intersection_with([&Set::new(), &set![2, 1]]);
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_intersection_of_scans_smallest_but_keeps_all_members() {
        let large: Set<i32> = (0..1000).collect();
        let small = set![5, 500, 5000];
        assert_eq!(Set::intersection_of([&large, &small]), set![5, 500]);
    }

    // =========================================================================
    // Difference
    // =========================================================================

    #[rstest]
    fn test_difference_with_removes_values_present_in_any_other(abc: [Set<i32>; 3]) {
        let [a, b, c] = abc;
        let mut receiver = a;
        receiver.difference_with([&b, &c]);
        assert_eq!(receiver, set![1, 2]);
    }

    #[rstest]
    fn test_difference_of_first_only_is_copy() {
        let only = set!["a", "b", "c"];
        let copy = Set::difference_of([&only]);
        assert_eq!(copy, only);
    }

    // =========================================================================
    // Unique
    // =========================================================================

    #[rstest]
    fn test_unique_of_worked_examples(abc: [Set<i32>; 3]) {
        let [a, b, c] = &abc;

        assert_eq!(Set::unique_of([a, b]), set![1, 2, 4, 6]);
        assert_eq!(Set::unique_of([b, c]), set![3, 4, 6, 7]);
        assert_eq!(Set::unique_of([a, b, c]), set![1, 2, 6, 7]);
    }

    #[rstest]
    fn test_unique_with_matches_unique_of(abc: [Set<i32>; 3]) {
        let [a, b, c] = &abc;
        let mut receiver = a.clone();
        receiver.unique_with([b, c]);
        assert_eq!(receiver, Set::unique_of([a, b, c]));
    }

    #[rstest]
    fn test_unique_counts_every_set_not_parity() {
        // Present in three sets: a pairwise XOR chain would keep it
        let shared = set![1];
        assert!(Set::unique_of([&shared, &shared, &shared]).is_empty());
        assert!(Set::unique_of_pairwise([&shared, &shared, &shared]).is_empty());
    }

    #[rstest]
    fn test_unique_of_same_set_twice_is_empty() {
        let set = set![1, 2, 3];
        assert!(Set::unique_of([&set, &set]).is_empty());
        assert_eq!(set.len(), 3);
    }

    #[rstest]
    fn test_unique_of_pairwise_worked_examples(abc: [Set<i32>; 3]) {
        let [a, b, c] = &abc;

        assert_eq!(Set::unique_of_pairwise([a, b]), set![1, 2, 4, 6]);
        assert_eq!(Set::unique_of_pairwise([b, c]), set![3, 4, 6, 7]);
        assert_eq!(Set::unique_of_pairwise([a, b, c]), set![1, 2, 6, 7]);
    }

    #[rstest]
    fn test_unique_of_pairwise_edge_cases() {
        let empty: [&Set<i32>; 0] = [];
        assert!(Set::unique_of_pairwise(empty).is_empty());

        let only = set![1, 2];
        assert_eq!(Set::unique_of_pairwise([&only]), only);
    }
}
