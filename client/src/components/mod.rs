//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navbar, the modal forms and the part details panels.
//! They read and write signals handed down by the owning page; network calls
//! live in the page or panel that owns the affected list.

pub mod compatibility_panel;
pub mod field;
pub mod location_form_modal;
pub mod modal;
pub mod navbar;
pub mod part_form_modal;
pub mod stock_panel;
pub mod vehicle_form_modal;
