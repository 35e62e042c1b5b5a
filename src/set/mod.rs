//! Unordered hash set with n-ary set algebra.
//!
//! This module provides [`Set`], a mutable collection of unique values backed
//! by [`std::collections::HashSet`].
//!
//! # Overview
//!
//! Besides the usual collection operations (`add`, `remove`, `contains`,
//! `len`, `clear`), a `Set` supports four algebra operations, each in two
//! forms:
//!
//! | Operation            | Mutator (`&mut self`)   | Constructor (new set)  |
//! |----------------------|-------------------------|------------------------|
//! | Union                | [`Set::union_with`]        | [`Set::union_of`]        |
//! | Intersection         | [`Set::intersection_with`] | [`Set::intersection_of`] |
//! | Difference           | [`Set::difference_with`]   | [`Set::difference_of`]   |
//! | Symmetric difference | [`Set::unique_with`]       | [`Set::unique_of`]       |
//!
//! Mutators change only the receiver. Constructors never change any input,
//! even when the same set is passed more than once.
//!
//! Symmetric difference over more than two sets keeps the elements that
//! occur in exactly one input. It is computed by occurrence counting in a
//! single pass; [`Set::unique_of_pairwise`] is the pairwise alternative kept
//! as a benchmark baseline.
//!
//! # Examples
//!
//! ```rust
//! use toolbox::set;
//! use toolbox::set::Set;
//!
//! let a = set![1, 2, 3, 4];
//! let b = set![3, 6];
//! let c = set![4, 7];
//!
//! assert_eq!(Set::union_of([&a, &b, &c]), set![1, 2, 3, 4, 6, 7]);
//! assert_eq!(Set::intersection_of([&a, &b]), set![3]);
//! assert_eq!(Set::difference_of([&a, &b, &c]), set![1, 2]);
//! assert_eq!(Set::unique_of([&a, &b, &c]), set![1, 2, 6, 7]);
//!
//! // Inputs are untouched
//! assert_eq!(a.to_string(), "(Set[i32]: [1 2 3 4])");
//! ```
//!
//! # Thread Safety
//!
//! `Set` has no interior mutability: it is `Send` and `Sync` whenever its
//! element type and hasher are, and every mutation requires `&mut self`.
//! Sharing one set for mutation across threads needs external
//! synchronization such as a `Mutex`.

// =============================================================================
// Default Hasher Type Alias
// =============================================================================

/// Hash builder used by [`Set`] unless another one is given.
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`,
/// which is fast but not resistant to hash flooding.
///
/// When the `ahash` feature is enabled (and `fxhash` is not), this is
/// `ahash::RandomState`.
///
/// Otherwise this is `std::collections::hash_map::RandomState`.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

mod algebra;
mod collection;
mod display;
mod iter;
#[cfg(feature = "serde")]
mod serde_support;

pub use collection::Set;
pub use iter::{SetIntoIterator, SetIterator};

// =============================================================================
// Tests
// =============================================================================
