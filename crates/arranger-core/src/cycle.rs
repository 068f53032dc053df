//! Cycling through closed, ordered enumerations.
//!
//! # Examples
//!
//! ```
//! use arranger_core::{next_case, CaseIterable};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Light {
//!     Red,
//!     Green,
//!     Amber,
//! }
//!
//! impl CaseIterable for Light {
//!     const ALL: &'static [Self] = &[Self::Red, Self::Green, Self::Amber];
//! }
//!
//! assert_eq!(next_case(Light::Red), Light::Green);
//! assert_eq!(next_case(Light::Amber), Light::Red);
//! ```

/// A type with a fixed, ordered list of every value it can take.
pub trait CaseIterable: Sized + 'static {
    /// Every case in declaration order.
    const ALL: &'static [Self];
}

/// Return the case after `current`, wrapping to the first after the last.
///
/// # Panics
///
/// Panics if `T::ALL` is empty or does not contain `current`. Both are
/// programming errors in the `CaseIterable` implementation.
#[must_use]
pub fn next_case<T>(current: T) -> T
where
    T: CaseIterable + PartialEq + Copy,
{
    let index = T::ALL
        .iter()
        .position(|case| *case == current)
        .expect("CaseIterable::ALL must list every value of the type");
    T::ALL[(index + 1) % T::ALL.len()]
}
