//! Shared traits and id helpers for finance primitives.

use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the finance state.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Generates a fresh opaque entity id.
///
/// Ids are collision-resistant UUID v4 tokens; fixed literal ids (such as the
/// default category seed) remain valid values of the same type.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Finds an entity by id within a collection slice.
pub fn find_by_id<'a, T: Identifiable>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
