//! Bounded-section scanning over line-oriented free text.
//!
//! A section is entered on the first line containing any `enter` keyword and
//! left on the first later line containing any `exit` keyword. The entering
//! line itself is never collected. Matching is case-insensitive substring
//! search, evaluated strictly in line order, so overlapping keywords resolve
//! to whichever line comes first.

/// Enter/exit keywords for one section. Keywords must be lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRule {
    pub enter: &'static [&'static str],
    pub exit: &'static [&'static str],
}

impl SectionRule {
    pub const fn new(enter: &'static [&'static str], exit: &'static [&'static str]) -> Self {
        Self { enter, exit }
    }

    fn enters(&self, lower_line: &str) -> bool {
        self.enter.iter().any(|k| lower_line.contains(k))
    }

    fn exits(&self, lower_line: &str) -> bool {
        self.exit.iter().any(|k| lower_line.contains(k))
    }
}

/// Collect the bullet items (lines starting with `-`) inside every occurrence
/// of the section described by `rule`.
///
/// The section may be re-entered after it was left: a later line matching an
/// enter keyword opens it again.
pub fn collect_bullets(text: &str, rule: &SectionRule) -> Vec<String> {
    let mut items = Vec::new();
    let mut in_section = false;

    for line in text.lines() {
        let lower = line.to_lowercase();

        if rule.enters(&lower) {
            in_section = true;
            continue;
        }

        if in_section && rule.exits(&lower) {
            in_section = false;
        }

        if in_section {
            if let Some(item) = bullet_text(line) {
                items.push(item.to_string());
            }
        }
    }

    items
}

/// Text of a `-` bullet line, trimmed; `None` for other lines or empty bullets.
pub fn bullet_text(line: &str) -> Option<&str> {
    let item = line.trim().strip_prefix('-')?.trim();
    (!item.is_empty()).then_some(item)
}
