//! Formatting for read-only record fields.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

/// `$x.yy`, or `"N/A"` when no price is known.
pub fn price_label(price: Option<f64>) -> String {
    price.map_or_else(|| "N/A".to_owned(), |p| format!("${p:.2}"))
}

/// The value, or `placeholder` when absent or empty.
pub fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => placeholder.to_owned(),
    }
}

/// Join present, non-empty parts with a space (e.g. variant and trim).
pub fn joined(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
