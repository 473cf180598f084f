//! Vehicle compatibility links on the part details page.

#[cfg(test)]
#[path = "compatibility_test.rs"]
mod compatibility_test;

use crate::net::types::Vehicle;

/// Catalog vehicles not yet linked to the part, in catalog order.
pub fn linkable(catalog: &[Vehicle], linked: &[Vehicle]) -> Vec<Vehicle> {
    catalog
        .iter()
        .filter(|v| !linked.iter().any(|l| l.id == v.id))
        .cloned()
        .collect()
}

/// Drop `vehicle_id` from the linked list after a successful unlink.
pub fn unlink_local(linked: &mut Vec<Vehicle>, vehicle_id: &str) {
    linked.retain(|v| v.id != vehicle_id);
}

/// Picker option label, e.g. `"Tesla Model 3 (2020)"`.
pub fn picker_label(vehicle: &Vehicle) -> String {
    format!("{} {} ({})", vehicle.make, vehicle.model, vehicle.from_year)
}
