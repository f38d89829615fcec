//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// with the same values are the same value. A `PermissionMatrix` is a value
/// object, an `EmployeeRecord` is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
