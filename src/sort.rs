//! Catalog ordering.
//!
//! The emitted catalog is grouped by category (in
//! [`ObjectType`](crate::object::ObjectType) declaration order) and
//! alphabetized case-insensitively within each group. The sort is stable:
//! records with identical case-folded names keep their input order.

use crate::object::CatalogObject;

/// Sorts records by `(category rank, case-folded name)`, stably.
pub fn sort_catalog(objects: &mut [CatalogObject]) {
    objects.sort_by_key(|o| (o.object_type.rank(), o.name.to_lowercase()));
}
