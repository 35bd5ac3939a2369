/// Normalize raw OCR output before section parsing.
///
/// Removes control characters (newline and tab survive), folds `\r\n` and bare
/// `\r` into `\n`, and turns no-break / zero-width spaces into plain spaces or
/// nothing. Line structure is kept intact: the nutrition parser depends on it.
pub fn normalize_ocr_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter_map(|c| match c {
            '\n' | '\t' => Some(c),
            '\u{00A0}' | '\u{2007}' | '\u{202F}' => Some(' '),
            '\u{200B}' | '\u{FEFF}' => None,
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
