//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are
//! defined entirely by their attribute values. Two value objects with the
//! same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify"
/// one, create a new one with the new values. This gives:
/// - **Thread safety**: immutable objects are safe to share across threads
/// - **Predictability**: a value can't be changed behind a caller's back
/// - **Value semantics**: values behave like primitives
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Money`, `Tax`, `ProductData`)
/// - **Entity**: has identity (`Product`, `Reservation` - same id means the
///   same thing, even as attributes change)
///
/// The trait requires `Clone + PartialEq + Debug`: value objects are cheap
/// to copy, compared attribute-by-attribute, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
