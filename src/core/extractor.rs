use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Icon glyph rules in Font Awesome builds look like `.fa-github:before{content:"\f09b"}`.
static ICON_SELECTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(fa-[a-z0-9-]+)::?before").unwrap());

// Some builds include style prefixes like .fab, .fas, .far, .fal; catch them too.
static STYLE_SELECTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(fa[brsl]?[a-z]?-[a-z0-9-]+)::?before").unwrap());

/// Extracts raw icon selector classes (`.fa-something:before`) from CSS text.
///
/// Both the base form and style-prefixed forms (`.fab-`, `.fas-`, ...) are
/// collected; the result may contain e.g. `fa-code`, `fa-github`, and
/// `fab-github` side by side. An empty set is a valid result, not an error.
pub fn extract_icon_classes(css_text: &str) -> HashSet<String> {
    let mut classes = HashSet::new();

    for caps in ICON_SELECTOR_RE.captures_iter(css_text) {
        classes.insert(caps[1].to_string());
    }
    for caps in STYLE_SELECTOR_RE.captures_iter(css_text) {
        classes.insert(caps[1].to_string());
    }

    classes
}
