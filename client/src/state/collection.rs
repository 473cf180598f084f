//! Local collection reconciliation after a mutation resolves.
//!
//! DESIGN
//! ======
//! Every mutation endpoint returns the authoritative entity (or nothing, for
//! deletes). Pages never patch fields in place; they replace whole records by
//! id so on-screen rows always equal some server response.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use crate::net::types::{Location, Part, Vehicle};

/// Records addressable by their backend identity.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Part {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Vehicle {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Location {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Where a freshly created record lands in the visible list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

/// Insert a newly created record.
pub fn insert_created<T>(items: &mut Vec<T>, item: T, placement: Placement) {
    match placement {
        Placement::Front => items.insert(0, item),
        Placement::Back => items.push(item),
    }
}

/// Replace the record with the same id; returns `false` if none matched.
pub fn replace_by_id<T: Keyed>(items: &mut [T], item: T) -> bool {
    match items.iter_mut().find(|existing| existing.key() == item.key()) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Remove every record with `id`; returns `false` if none matched.
pub fn remove_by_id<T: Keyed>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|existing| existing.key() != id);
    items.len() != before
}

/// Apply a successful create (`was_update == false`) or update response.
pub fn apply_saved<T: Keyed>(items: &mut Vec<T>, saved: T, was_update: bool, placement: Placement) {
    if was_update {
        replace_by_id(items, saved);
    } else {
        insert_created(items, saved, placement);
    }
}

/// Look up a record by id.
pub fn find_by_id<'a, T: Keyed>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|existing| existing.key() == id)
}
