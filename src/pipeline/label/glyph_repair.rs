//! Repair of digit-for-letter OCR misreads in nutrient names.
//!
//! OCR engines confuse a handful of glyph pairs (`0`/`o`, `1`/`l`/`i`,
//! `5`/`s`, `8`/`b`). A word is only touched when it mixes letters with such
//! digits and exactly one letter substitution turns it into a known nutrient
//! term. Words made of letters alone are never rewritten, so printed names,
//! plurals and spellings pass through unchanged.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Nutrition vocabulary. Sorted for binary search, lower-case.
const NUTRIENT_TERMS: &[&str] = &[
    "added", "calcium", "calorie", "calories", "carbohydrate", "carbohydrates",
    "cholesterol", "dietary", "energy", "fat", "fats", "fiber", "fibre", "iron",
    "magnesium", "monounsaturated", "phosphorus", "polyunsaturated", "potassium",
    "protein", "proteins", "salt", "saturated", "sodium", "sugar", "sugars",
    "total", "trans", "vitamin", "vitamins", "zinc",
];

/// Words with more suspicious digits than this are left alone.
const MAX_GLYPHS_PER_WORD: usize = 3;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").expect("Invalid word regex"));

/// Replace misread digits inside the words of a nutrient name.
pub fn repair_nutrient_name(name: &str) -> String {
    WORD.replace_all(name, |caps: &Captures<'_>| {
        let word = &caps[0];
        repair_word(word).unwrap_or_else(|| word.to_string())
    })
    .into_owned()
}

fn glyph_letters(digit: char) -> Option<&'static [char]> {
    match digit {
        '0' => Some(&['o']),
        '1' => Some(&['l', 'i']),
        '5' => Some(&['s']),
        '8' => Some(&['b']),
        _ => None,
    }
}

/// The repaired word, or `None` when the word needs no repair, cannot be
/// repaired, or repairs to more than one term.
fn repair_word(word: &str) -> Option<String> {
    let chars: Vec<char> = word.chars().collect();
    if !chars.iter().any(char::is_ascii_alphabetic) {
        return None;
    }

    let digit_positions: Vec<usize> = (0..chars.len()).filter(|&i| chars[i].is_ascii_digit()).collect();
    if digit_positions.is_empty() || digit_positions.len() > MAX_GLYPHS_PER_WORD {
        return None;
    }

    let mut candidates = vec![chars.iter().map(char::to_ascii_lowercase).collect::<Vec<char>>()];
    for &pos in &digit_positions {
        let letters = glyph_letters(chars[pos])?;
        candidates = candidates
            .into_iter()
            .flat_map(|candidate| {
                letters.iter().map(move |&letter| {
                    let mut next = candidate.clone();
                    next[pos] = letter;
                    next
                })
            })
            .collect();
    }

    let mut terms = candidates
        .into_iter()
        .map(|c| c.into_iter().collect::<String>())
        .filter(|c| NUTRIENT_TERMS.binary_search(&c.as_str()).is_ok());
    let term: Vec<char> = terms.next()?.chars().collect();
    if terms.next().is_some() {
        return None;
    }

    let shouting = chars.iter().filter(|c| c.is_ascii_alphabetic()).all(char::is_ascii_uppercase);
    let repaired = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| match (c.is_ascii_digit(), shouting || i == 0) {
            (false, _) => c,
            (true, true) => term[i].to_ascii_uppercase(),
            (true, false) => term[i],
        })
        .collect();

    tracing::trace!(glyphs = digit_positions.len(), "Repaired nutrient name glyphs");
    Some(repaired)
}
