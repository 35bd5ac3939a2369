use std::sync::LazyLock;

use regex::Regex;

static SERVING_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\s*(\d+)\s*g\s*\)").expect("Invalid serving size regex")
});

/// First parenthesized `<integer> g`, normalized to `"<n> g"`.
pub fn extract_serving_size(text: &str) -> Option<String> {
    SERVING_SIZE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|grams| format!("{} g", grams.as_str()))
}
