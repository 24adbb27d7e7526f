//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Documents fetched from the content store are entities: two documents with
/// the same id are the same document, regardless of field values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
