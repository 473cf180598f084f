//! Navigation link definitions and active-route matching.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A top-bar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Parts" },
    NavLink { href: "/vehicles", label: "Vehicles" },
    NavLink { href: "/locations", label: "Locations" },
];

/// Whether `target` should be highlighted while `current` is displayed.
///
/// The root link matches exactly; every other link matches its own path and
/// anything nested under it.
pub fn is_active(current: &str, target: &str) -> bool {
    let current = trim_trailing_slash(current);
    let target = trim_trailing_slash(target);
    if target == "/" {
        return current == "/";
    }
    match current.strip_prefix(target) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Path of the part details route for `part_id`.
pub fn part_details_path(part_id: &str) -> String {
    format!("/parts/{part_id}")
}
