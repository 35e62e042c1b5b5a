#![cfg(feature = "set")]
//! Property-based tests for the algebra laws of Set.
//!
//! Elements are drawn from a small range so that generated sets overlap.

use proptest::prelude::*;
use toolbox::set::Set;

fn small_set() -> impl Strategy<Value = Set<i32>> {
    prop::collection::vec(0..24i32, 0..20).prop_map(|elements| elements.into_iter().collect())
}

fn set_list() -> impl Strategy<Value = Vec<Set<i32>>> {
    prop::collection::vec(small_set(), 0..6)
}

/// Counts how many of `sets` hold `value`.
fn occurrences(sets: &[Set<i32>], value: i32) -> usize {
    sets.iter().filter(|set| set.contains(&value)).count()
}

// =============================================================================
// Union Identity Law
// Description: A ∪ ∅ = A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_identity_law(set in small_set()) {
        let empty: Set<i32> = Set::new();

        prop_assert_eq!(Set::union_of([&set, &empty]), set.clone());
        prop_assert_eq!(Set::union_of([&empty, &set]), set);
    }
}

// =============================================================================
// Union Commutativity Law
// Description: A ∪ B = B ∪ A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(set_a in small_set(), set_b in small_set()) {
        prop_assert_eq!(Set::union_of([&set_a, &set_b]), Set::union_of([&set_b, &set_a]));
    }
}

// =============================================================================
// Union Membership Law
// Description: x ∈ ⋃ sets iff x belongs to at least one set
// =============================================================================

proptest! {
    #[test]
    fn prop_union_membership_law(sets in set_list(), probe in 0..24i32) {
        let union = Set::union_of(&sets);
        prop_assert_eq!(union.contains(&probe), occurrences(&sets, probe) > 0);
    }
}

// =============================================================================
// Intersection Laws
// Description: A ∩ A = A, A ∩ ∅ = ∅, and A ∩ B ⊆ A
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_idempotence_law(set in small_set()) {
        prop_assert_eq!(Set::intersection_of([&set, &set]), set);
    }

    #[test]
    fn prop_intersection_annihilation_law(set in small_set()) {
        let empty: Set<i32> = Set::new();
        prop_assert!(Set::intersection_of([&set, &empty]).is_empty());
    }

    #[test]
    fn prop_intersection_subset_law(set_a in small_set(), set_b in small_set()) {
        let intersection = Set::intersection_of([&set_a, &set_b]);
        prop_assert!(intersection.is_subset(&set_a));
        prop_assert!(intersection.is_subset(&set_b));
    }
}

// =============================================================================
// Intersection Membership Law
// Description: x ∈ ⋂ sets iff every set holds x
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_membership_law(sets in set_list(), probe in 0..24i32) {
        let intersection = Set::intersection_of(&sets);
        let expected = !sets.is_empty() && occurrences(&sets, probe) == sets.len();
        prop_assert_eq!(intersection.contains(&probe), expected);
    }
}

// =============================================================================
// Difference Laws
// Description: A \ A = ∅, A \ ∅ = A, and (A \ B) ∩ B = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_self_cancellation_law(set in small_set()) {
        prop_assert!(Set::difference_of([&set, &set]).is_empty());
    }

    #[test]
    fn prop_difference_identity_law(set in small_set()) {
        let empty: Set<i32> = Set::new();
        prop_assert_eq!(Set::difference_of([&set, &empty]), set);
    }

    #[test]
    fn prop_difference_disjoint_law(set_a in small_set(), set_b in small_set()) {
        let difference = Set::difference_of([&set_a, &set_b]);
        prop_assert!(difference.is_disjoint(&set_b));
        prop_assert!(difference.is_subset(&set_a));
    }
}

// =============================================================================
// Unique Membership Law
// Description: x ∈ unique(sets) iff exactly one set holds x
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_membership_law(sets in set_list(), probe in 0..24i32) {
        let unique = Set::unique_of(&sets);
        prop_assert_eq!(unique.contains(&probe), occurrences(&sets, probe) == 1);
    }
}

// =============================================================================
// Unique Algorithm Agreement Law
// Description: Counting and pairwise folding give the same set
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_algorithms_agree_law(sets in set_list()) {
        prop_assert_eq!(Set::unique_of_pairwise(&sets), Set::unique_of(&sets));
    }
}

// =============================================================================
// Mutator-Constructor Agreement Law
// Description: a.op_with(others) equals op_of([a, others...])
// =============================================================================

proptest! {
    #[test]
    fn prop_mutators_agree_with_constructors_law(receiver in small_set(), others in set_list()) {
        let all: Vec<&Set<i32>> = std::iter::once(&receiver).chain(&others).collect();

        let mut union = receiver.clone();
        union.union_with(&others);
        prop_assert_eq!(union, Set::union_of(all.iter().copied()));

        let mut intersection = receiver.clone();
        intersection.intersection_with(&others);
        prop_assert_eq!(intersection, Set::intersection_of(all.iter().copied()));

        let mut difference = receiver.clone();
        difference.difference_with(&others);
        prop_assert_eq!(difference, Set::difference_of(all.iter().copied()));

        let mut unique = receiver.clone();
        unique.unique_with(&others);
        prop_assert_eq!(unique, Set::unique_of(all.iter().copied()));
    }
}

// =============================================================================
// Input Preservation Law
// Description: Constructors never modify their inputs
// =============================================================================

proptest! {
    #[test]
    fn prop_constructors_preserve_inputs_law(sets in set_list()) {
        let before = sets.clone();

        let _ = Set::union_of(&sets);
        let _ = Set::intersection_of(&sets);
        let _ = Set::difference_of(&sets);
        let _ = Set::unique_of(&sets);
        let _ = Set::unique_of_pairwise(&sets);

        prop_assert_eq!(sets, before);
    }
}
