//! Entity trait: objects compared by identity rather than by attributes.

/// Something with a stable identity, such as an invoice.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Two entities are the same when their ids match, whatever their state.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
