/// Every line starting with `*`, anywhere in the text, in order.
pub fn extract_footnotes(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| l.starts_with('*') && l.len() > 1)
        .map(String::from)
        .collect()
}
