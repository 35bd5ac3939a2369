//! Nutrition panel reconstruction from OCR line runs.
//!
//! OCR flattens a tabular panel into runs of "name line, then one line per
//! number". Without layout coordinates the table is rebuilt positionally: each
//! nutrient header consumes the numeric lines directly below it, assigned to the
//! configured columns in order. Rows printed on a single line
//! (`Energy (kcal) 527 105 5.3`) are read in place.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::config::{LabelParserConfig, NutrientColumn};
use super::glyph_repair::repair_nutrient_name;
use super::types::NutrientEntry;

static SECTION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)NUTRITIONAL INFORMATION").expect("Invalid nutrition section regex")
});

static DATA_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)energy|calorie").expect("Invalid data start regex"));

/// A lone number, optionally with `<`/`~` qualifier or `%` suffix.
static NUMERIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[<>~]?\s*\d+(?:[.,]\d+)?\s*%?$").expect("Invalid numeric line regex")
});

/// A printed "no value" marker.
static PLACEHOLDER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-–—]+$").expect("Invalid placeholder regex"));

/// Optional leading dash, nutrient name, optional parenthesized unit. A
/// footnote star may follow the name or the unit; it never joins the name.
static NUTRIENT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<dash>[-–—•]\s*)?(?P<name>[A-Za-z][A-Za-z0-9'./&]*(?:[\s,-]+[A-Za-z][A-Za-z0-9'./&]*)*)\s*\*?\s*(?:\((?P<unit>[^)]*)\))?\s*\*?$",
    )
    .expect("Invalid nutrient header regex")
});

/// Header followed on the same line by one or more values.
static INLINE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<head>.*?[A-Za-z)*])\s+(?P<values>(?:[<>~]?\d+(?:[.,]\d+)?%?|[-–—])(?:\s+(?:[<>~]?\d+(?:[.,]\d+)?%?|[-–—]))*)$",
    )
    .expect("Invalid inline row regex")
});

/// One cell of a nutrition row.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Value(Option<f64>),
    Placeholder,
}

impl Cell {
    fn value(self) -> Option<f64> {
        match self {
            Cell::Value(v) => v,
            Cell::Placeholder => None,
        }
    }
}

/// Extract the nutrition table, keyed by nutrient name.
///
/// Starts at `NUTRITIONAL INFORMATION` and skips header lines up to the first
/// `Energy`/`Calorie` line. Nutrients without any numeric value are dropped.
/// A name seen twice keeps its first row.
pub fn extract_nutrition(text: &str, config: &LabelParserConfig) -> BTreeMap<String, NutrientEntry> {
    let mut facts = BTreeMap::new();

    let Some(section) = SECTION_START.find(text) else {
        return facts;
    };

    let lines: Vec<&str> = text[section.start()..]
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some(start) = lines.iter().position(|l| DATA_START.is_match(l)) else {
        return facts;
    };

    let mut i = start;
    while i < lines.len() {
        let line = lines[i];

        if parse_cell(line).is_some() || line.starts_with('*') {
            i += 1;
            continue;
        }

        if let Some(header) = NUTRIENT_HEADER.captures(line) {
            let mut cells = Vec::with_capacity(config.columns.len());
            let mut j = i + 1;
            while j < lines.len() && cells.len() < config.columns.len() {
                match parse_cell(lines[j]) {
                    Some(cell) => cells.push(cell),
                    None => break,
                }
                j += 1;
            }

            record(&mut facts, &header, &cells, config);
            i = j;
            continue;
        }

        if let Some(row) = INLINE_ROW.captures(line) {
            if let Some(header) = NUTRIENT_HEADER.captures(&row["head"]) {
                let cells: Vec<Cell> = row["values"]
                    .split_whitespace()
                    .filter_map(parse_cell)
                    .take(config.columns.len())
                    .collect();
                record(&mut facts, &header, &cells, config);
            }
        }

        i += 1;
    }

    facts
}

fn record(
    facts: &mut BTreeMap<String, NutrientEntry>,
    header: &regex::Captures<'_>,
    cells: &[Cell],
    config: &LabelParserConfig,
) {
    let raw_name = header["name"].trim();
    let name = if config.repair_ocr_glyphs {
        repair_nutrient_name(raw_name)
    } else {
        raw_name.to_string()
    };

    let mut entry = NutrientEntry {
        unit: header
            .name("unit")
            .map(|u| u.as_str().trim().to_string())
            .unwrap_or_default(),
        indented: header.name("dash").is_some(),
        ..Default::default()
    };

    for (column, cell) in config.columns.iter().zip(cells) {
        let value = cell.value();
        match column {
            NutrientColumn::Per100g => entry.per_100g = value,
            NutrientColumn::PerServing => entry.per_serving = value,
            NutrientColumn::RdaPercentage => entry.rda_percentage = value,
        }
    }

    if !entry.has_values() {
        tracing::trace!(nutrient = %name, "Dropped nutrient without values");
        return;
    }

    facts.entry(name).or_insert(entry);
}

/// Classify a line as a numeric cell; `None` if it is not one.
fn parse_cell(line: &str) -> Option<Cell> {
    if PLACEHOLDER_LINE.is_match(line) {
        return Some(Cell::Placeholder);
    }
    if !NUMERIC_LINE.is_match(line) {
        return None;
    }
    let number: String = line
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '~' | '%') && !c.is_whitespace())
        .collect();
    if is_grouped_thousands(&number) {
        tracing::trace!("Ambiguous comma in nutrition cell, value left absent");
        return Some(Cell::Value(None));
    }
    Some(Cell::Value(number.replace(',', ".").parse::<f64>().ok()))
}

/// `2,205` reads equally as a decimal comma or a thousands separator. A comma
/// before exactly three digits with a non-zero integer part is not guessed.
fn is_grouped_thousands(number: &str) -> bool {
    number
        .split_once(',')
        .is_some_and(|(int, frac)| frac.len() == 3 && !int.starts_with('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> BTreeMap<String, NutrientEntry> {
        extract_nutrition(text, &LabelParserConfig::default())
    }

    #[test]
    fn no_section_marker_is_empty() {
        assert!(parse("Energy (kcal)\n527\n105").is_empty());
    }

    #[test]
    fn no_energy_line_is_empty() {
        assert!(parse("NUTRITIONAL INFORMATION\nProtein (g)\n6.4").is_empty());
    }

    #[test]
    fn headers_before_energy_are_discarded() {
        let text = "NUTRITIONAL INFORMATION (Approx. Values)\nPer Serve\n%RDA\nPer 100 g\n(20 g)\nper serve\nEnergy (kcal)\n527\n105\n5.3";
        let facts = parse(text);
        assert_eq!(facts.len(), 1);
        let energy = &facts["Energy"];
        assert_eq!(energy.unit, "kcal");
        assert_eq!(energy.per_100g, Some(527.0));
        assert_eq!(energy.per_serving, Some(105.0));
        assert_eq!(energy.rda_percentage, Some(5.3));
        assert!(!energy.indented);
    }

    #[test]
    fn short_runs_leave_trailing_columns_absent() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\nProtein (g)\n6.4\n1.3\nCarbohydrate (g)\n60.5";
        let facts = parse(text);
        assert_eq!(facts["Energy"].per_serving, None);
        assert_eq!(facts["Protein"].per_serving, Some(1.3));
        assert_eq!(facts["Protein"].rda_percentage, None);
        assert_eq!(facts["Carbohydrate"].per_100g, Some(60.5));
    }

    #[test]
    fn at_most_three_values_consumed() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n1\n2\n3\n4\nSodium (mg)\n5";
        let facts = parse(text);
        assert_eq!(facts["Energy"].rda_percentage, Some(3.0));
        assert_eq!(facts["Sodium"].per_100g, Some(5.0));
    }

    #[test]
    fn placeholder_is_absent_not_zero() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\n105\n5.3\nTrans fat (g)\n0.1\n-\n1.0\nCholesterol (mg)\n0\n0\n0";
        let facts = parse(text);
        assert_eq!(facts["Trans fat"].per_serving, None);
        assert_eq!(facts["Trans fat"].rda_percentage, Some(1.0));
        assert_eq!(facts["Cholesterol"].per_serving, Some(0.0));
    }

    #[test]
    fn header_without_numbers_is_dropped() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\nVitamins\nSodium (mg)\n792.1";
        let facts = parse(text);
        assert!(!facts.contains_key("Vitamins"));
        assert!(facts.contains_key("Sodium"));
    }

    #[test]
    fn all_placeholder_row_is_dropped() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\nFibre (g)\n-\n-";
        assert!(!parse(text).contains_key("Fibre"));
    }

    #[test]
    fn leading_dash_marks_sub_nutrient() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\nCarbohydrate (g)\n60.5\n-Total Sugars (g)\n7.0\n1.4\n– Added Sugars (g)\n5.5";
        let facts = parse(text);
        assert!(!facts["Carbohydrate"].indented);
        assert!(facts["Total Sugars"].indented);
        assert!(facts["Added Sugars"].indented);
        assert_eq!(facts["Added Sugars"].unit, "g");
    }

    #[test]
    fn footnote_lines_inside_table_are_skipped() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\n*Other than naturally occurring trans fat\nSodium (mg)\n7.9";
        let facts = parse(text);
        assert_eq!(facts.len(), 2);
    }

    #[test]
    fn inline_rows_are_read_in_place() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal) 527 105 5.3\nProtein (g) 6.4 -";
        let facts = parse(text);
        assert_eq!(facts["Energy"].rda_percentage, Some(5.3));
        assert_eq!(facts["Protein"].per_100g, Some(6.4));
        assert_eq!(facts["Protein"].per_serving, None);
    }

    #[test]
    fn qualified_and_comma_decimals() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\nSalt (g)\n<0,5\n~1\n12%";
        let salt = &parse(text)["Salt"];
        assert_eq!(salt.per_100g, Some(0.5));
        assert_eq!(salt.per_serving, Some(1.0));
        assert_eq!(salt.rda_percentage, Some(12.0));
    }

    #[test]
    fn first_duplicate_wins() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\nSodium (mg)\n1\nSodium (mg)\n2";
        assert_eq!(parse(text)["Sodium"].per_100g, Some(1.0));
    }

    #[test]
    fn glyph_repair_is_opt_in() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\nPr0tein (g)\n6.4\nFibres (g)\n2.1";
        let raw = parse(text);
        assert!(raw.contains_key("Pr0tein"));
        assert!(raw.contains_key("Fibres"));

        let repairing = LabelParserConfig { repair_ocr_glyphs: true, ..Default::default() };
        let repaired = extract_nutrition(text, &repairing);
        assert!(repaired.contains_key("Protein"));
        assert!(repaired.contains_key("Fibres"));
    }

    #[test]
    fn starred_name_before_unit() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\n105\n5.3\nTrans fat* (g)\n0.1\n0.02\n1.0\nSodium (mg)\n7.9";
        let facts = parse(text);
        let keys: Vec<&str> = facts.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Energy", "Sodium", "Trans fat"]);

        let trans = &facts["Trans fat"];
        assert_eq!(trans.unit, "g");
        assert_eq!(trans.per_serving, Some(0.02));
        assert_eq!(facts["Sodium"].per_100g, Some(7.9));
    }

    #[test]
    fn starred_inline_row() {
        let facts = parse("NUTRITIONAL INFORMATION\nEnergy (kcal) 527\nTotal fat* (g) 29.5 5.9 8.8");
        assert_eq!(facts["Total fat"].rda_percentage, Some(8.8));
    }

    #[test]
    fn grouped_thousands_comma_is_left_absent() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kJ)\n2,205\n441\n5,3";
        let energy = &parse(text)["Energy"];
        assert_eq!(energy.per_100g, None);
        assert_eq!(energy.per_serving, Some(441.0));
        assert_eq!(energy.rda_percentage, Some(5.3));
    }

    #[test]
    fn two_column_layout_assigns_in_configured_order() {
        let config = LabelParserConfig {
            columns: vec![NutrientColumn::PerServing, NutrientColumn::RdaPercentage],
            ..Default::default()
        };
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n105\n5.3\n99";
        let facts = extract_nutrition(text, &config);
        let energy = &facts["Energy"];
        assert_eq!(energy.per_100g, None);
        assert_eq!(energy.per_serving, Some(105.0));
        assert_eq!(energy.rda_percentage, Some(5.3));
    }

    #[test]
    fn names_with_vitamin_codes() {
        let text = "NUTRITIONAL INFORMATION\nEnergy (kcal)\n527\nVitamin B12 (mcg)\n0.4";
        assert_eq!(parse(text)["Vitamin B12"].unit, "mcg");
    }

    #[test]
    fn cell_classification() {
        assert_eq!(parse_cell("-"), Some(Cell::Placeholder));
        assert_eq!(parse_cell("792.1"), Some(Cell::Value(Some(792.1))));
        assert_eq!(parse_cell("Per 100 g"), None);
        assert_eq!(parse_cell("(20 g)"), None);
        assert_eq!(parse_cell("2,205"), Some(Cell::Value(None)));
        assert_eq!(parse_cell("0,500"), Some(Cell::Value(Some(0.5))));
        assert_eq!(parse_cell("1,5"), Some(Cell::Value(Some(1.5))));
    }
}
