use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Literal `CONTAINS` up to the next `.`, `MAY`, or end of text. Both words
/// only match whole.
static ALLERGEN_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\bCONTAINS\b(.*?)(?:\.|\bMAY\b|\z)").expect("Invalid allergen span regex")
});

/// Extract the declared allergens from the first `CONTAINS` statement.
pub fn extract_allergens(text: &str) -> BTreeSet<String> {
    let Some(span) = ALLERGEN_SPAN.captures(text).and_then(|c| c.get(1)) else {
        return BTreeSet::new();
    };

    span.as_str()
        .trim_start_matches(|c: char| c == ':' || c.is_whitespace())
        .split([',', '.', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reads_up_to_full_stop() {
        assert_eq!(extract_allergens("CONTAINS SOY, WHEAT. MAY CONTAIN MILK."), set(&["SOY", "WHEAT"]));
    }

    #[test]
    fn stops_at_may() {
        assert_eq!(extract_allergens("CONTAINS MILK; EGG MAY CONTAIN NUTS"), set(&["MILK", "EGG"]));
    }

    #[test]
    fn may_inside_a_word_does_not_stop() {
        assert_eq!(
            extract_allergens("CONTAINS EGG, MAYONNAISE BASE. MAY CONTAIN NUTS."),
            set(&["EGG", "MAYONNAISE BASE"])
        );
    }

    #[test]
    fn contains_inside_a_word_is_not_a_declaration() {
        assert!(extract_allergens("RECONTAINSERTED LID").is_empty());
    }

    #[test]
    fn runs_to_end_of_text() {
        assert_eq!(extract_allergens("CONTAINS: SESAME"), set(&["SESAME"]));
    }

    #[test]
    fn may_contain_alone_is_not_a_declaration() {
        assert!(extract_allergens("MAY CONTAIN MILK.").is_empty());
    }

    #[test]
    fn missing_statement_is_empty() {
        assert!(extract_allergens("INGREDIENTS: OATS").is_empty());
        assert!(extract_allergens("CONTAINS.").is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(extract_allergens("CONTAINS SOY, SOY ; WHEAT"), set(&["SOY", "WHEAT"]));
    }
}
