use std::sync::LazyLock;

use regex::Regex;

/// `INGREDIENTS:` up to the first following section marker, or end of text.
/// Markers only match as whole words.
static INGREDIENT_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)INGREDIENTS:(.*?)(?:\bNUTRITIONAL INFORMATION\b|\bCONTAINS\b|\bALLERGENS?\b|\bSTORE\b|\z)",
    )
    .expect("Invalid ingredient span regex")
});

/// Extract the ingredient list in label order.
///
/// Missing `INGREDIENTS:` marker yields an empty list.
pub fn extract_ingredients(text: &str) -> Vec<String> {
    let Some(span) = INGREDIENT_SPAN.captures(text).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    let joined = span
        .as_str()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    split_ingredients(&joined)
}

/// Split on commas whose next non-space character is upper-case.
///
/// Commas followed by lower-case text stay inside the item, which keeps
/// mixed-case parenthetical sub-lists such as `Seasoning (sugar, salt)` whole.
/// All-caps sub-lists are still split: the heuristic cannot tell them apart.
/// Items are trimmed of whitespace and stray commas.
pub fn split_ingredients(joined: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut start = 0;

    for (i, c) in joined.char_indices() {
        if c != ',' {
            continue;
        }
        let next = joined[i + 1..].trim_start().chars().next();
        if next.is_some_and(char::is_uppercase) {
            items.push(&joined[start..i]);
            start = i + 1;
        }
    }
    items.push(&joined[start..]);

    items
        .into_iter()
        .map(|s| s.trim_matches(|c: char| c.is_whitespace() || c == ','))
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
