//! Profile image fallback.

use crate::types::Provider;

/// The provider's image, or `placeholder` when none is usable.
pub fn profile_image<'a>(provider: &'a Provider, placeholder: &'a str) -> &'a str {
    match provider.profile_image.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => placeholder,
    }
}

/// Up to two initials for the avatar badge, e.g. "Dr. Jane Doe" -> "JD".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|word| !word.ends_with('.'))
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
