//! Lookup-key generation for skill labels.
//!
//! Each free-text label is reduced to the key forms the catalog tables
//! are indexed by. Keeping these as plain functions makes the candidate
//! set easy to pin down in tests: for any label, resolution consults at
//! most the slug form, the compact form, and the raw lowercase form.

/// Slugified form: lowercase, alphanumeric runs joined by single dashes,
/// no leading or trailing dash. `"React.js"` becomes `"react-js"`.
#[must_use]
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for c in label.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Compacted form: lowercase alphanumerics only. `"React.js"` becomes
/// `"reactjs"`, which is how most catalog aliases are spelled.
#[must_use]
pub fn compact(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
