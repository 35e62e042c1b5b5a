//! `Display` and `Debug` rendering for [`Set`].

use std::any::type_name;
use std::fmt;

use super::Set;

/// Returns the name of `T` with every module path stripped, e.g.
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let mut short = String::with_capacity(full.len());
    // Start of the path currently being written into `short`.
    let mut path_start = 0;
    let mut characters = full.chars().peekable();

    while let Some(character) = characters.next() {
        if character == ':' && characters.peek() == Some(&':') {
            characters.next();
            short.truncate(path_start);
        } else {
            short.push(character);
            if !(character.is_alphanumeric() || character == '_') {
                path_start = short.len();
            }
        }
    }

    short
}

/// Renders the set as `(Set[<type>]: [e1 e2 ...])`, or
/// `(Set[<type>]: <empty>)` when empty.
///
/// Elements are sorted by their rendered text so the output is stable; the
/// set itself stays unordered.
///
/// # Examples
///
/// ```rust
/// use toolbox::set;
/// use toolbox::set::Set;
///
/// assert_eq!(set![3, 1, 2].to_string(), "(Set[i32]: [1 2 3])");
///
/// let empty: Set<String> = Set::new();
/// assert_eq!(empty.to_string(), "(Set[String]: <empty>)");
/// ```
impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_label = short_type_name::<T>();

        if self.is_empty() {
            return write!(formatter, "(Set[{type_label}]: <empty>)");
        }

        let mut rendered: Vec<String> = self.iter().map(ToString::to_string).collect();
        rendered.sort_unstable();

        write!(formatter, "(Set[{type_label}]: [{}])", rendered.join(" "))
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
