//! Value object trait: equality by value, not identity.
//!
//! Catalog attributes and items are value objects: they are defined entirely by
//! their attribute values and never change after construction.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Because nothing mutates them, they are safe to share across
/// threads behind a read-only index.
///
/// Example:
/// - `Color::Red` is a value object
/// - `Item { color: Red, size: Small, .. }` is a value object
///
/// ```ignore
/// let a = Item::with_id(id, "tee", Color::Red, Size::Small);
/// let b = Item::with_id(id, "tee", Color::Red, Size::Small);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
