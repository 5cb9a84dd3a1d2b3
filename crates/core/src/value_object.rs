//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Filter criteria
/// are the canonical example in this domain: two criteria with the same
/// category, price bound, rating floor, stock status, brand, and repeat flag
/// are interchangeable, no matter where they came from.
///
/// To "modify" a value object, create a new one with the new values. This
/// keeps them safe to share across display panels running concurrently.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
