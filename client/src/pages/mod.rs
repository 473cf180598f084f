//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its records and modal state in local signals, issues the
//! REST calls for its route and delegates rendering details to `components`.

pub mod locations;
pub mod part_details;
pub mod parts;
pub mod vehicles;
