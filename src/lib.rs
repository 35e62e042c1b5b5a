//! # toolbox
//!
//! A personal utility library of generic data-structure helpers.
//!
//! ## Overview
//!
//! The library currently ships one subsystem:
//!
//! - **Set**: an unordered, hash-backed collection of unique values with
//!   n-ary set algebra (union, intersection, difference and symmetric
//!   difference), each available as an in-place mutator and as a
//!   constructor that leaves its inputs untouched.
//!
//! ## Feature Flags
//!
//! - `set`: The [`set`] module (enabled by default)
//! - `fxhash`: Use `rustc_hash::FxBuildHasher` as the default hasher
//! - `ahash`: Use `ahash::RandomState` as the default hasher
//! - `serde`: `Serialize`/`Deserialize` for [`set::Set`]
//! - `tracing`: Trace spans around the n-ary algebra operations
//! - `full`: Enable `set`, `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use toolbox::prelude::*;
//!
//! let a = set![1, 2, 3, 4];
//! let b = set![3, 6];
//! let c = set![4, 7];
//!
//! let unique = Set::unique_of([&a, &b, &c]);
//! assert!(unique.contains_exactly(&[1, 2, 6, 7]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set type and the [`set!`] macro.
///
/// # Usage
///
/// ```rust
/// use toolbox::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "set")]
    pub use crate::set;
    #[cfg(feature = "set")]
    pub use crate::set::*;
}

#[macro_use]
mod tracing_support;

#[cfg(feature = "set")]
mod macros;

#[cfg(feature = "set")]
pub mod set;
