//! URL slugs for detail pages.

/// Lowercase, collapse every run of non-alphanumerics into `-`, trim dashes.
///
/// `"IR arquitectura"` → `"ir-arquitectura"`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("IR arquitectura"), "ir-arquitectura");
        assert_eq!(slugify("  Casa ATO / 2021 "), "casa-ato-2021");
        assert_eq!(slugify("--Already-slugged--"), "already-slugged");
        assert_eq!(slugify("Café"), "caf");
        assert_eq!(slugify(""), "");
    }
}
