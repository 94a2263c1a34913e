//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two kindness
/// scores of 7 are the same score; two animals named "Kesha" are not the same
/// animal.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Kindness(u8);
///
/// impl ValueObject for Kindness {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
