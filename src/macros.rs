//! The `set!` macro for building a [`Set`](crate::set::Set) from a list of
//! values.

/// Creates a [`Set`](crate::set::Set) containing the given values.
///
/// Duplicate values collapse into one element, and the set uses the
/// [`DefaultHashBuilder`](crate::set::DefaultHashBuilder).
///
/// # Syntax
///
/// - `set![]` - An empty set (the element type must be inferable)
/// - `set![a, b, c]` - A set of the distinct values `a`, `b`, `c`
///
/// # Examples
///
/// ```
/// use toolbox::set;
/// use toolbox::set::Set;
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
///
/// let letters = set!["a", "b", "c", "a"];
/// assert_eq!(letters.len(), 3);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::set::Set::new()
    };

    ($($value:expr),+ $(,)?) => {
        $crate::set::Set::from_values([$($value),+])
    };
}
