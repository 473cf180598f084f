//! Client-side view state for the inventory pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own their record lists and modal state in signals. The types here
//! are plain data with the reconciliation and form-normalization rules, so
//! they can be exercised without a browser.

pub mod collection;
pub mod compatibility;
pub mod editor;
pub mod location_draft;
pub mod part_draft;
pub mod stock;
pub mod vehicle_draft;

#[cfg(test)]
pub(crate) mod test_fixtures;
