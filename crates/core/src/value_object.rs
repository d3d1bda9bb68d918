//! Value object marker: equality by value, not identity.

/// Marker trait for value objects.
///
/// Implementors are immutable once constructed and compared by their
/// contents. Construction goes through a validating `parse`, so a value that
/// exists is always a valid one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
