//! Line-oriented word tokenizer feeding the TF-IDF scorer.
//!
//! Each line is lowercased, stripped of everything that is not an ASCII
//! letter, ASCII digit or whitespace, and split on runs of whitespace.
//! Tokens keep their order of appearance, duplicates included.

/// Whitespace as understood by the splitter: space, tab, LF, VT, FF, CR.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Normalize a single line: lowercase, then drop punctuation and non-ASCII.
fn normalize_line(line: &str) -> String {
    line.to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || is_separator(c))
        .collect()
}

/// Tokenize a sequence of lines into lowercase word tokens.
pub fn tokenize<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = Vec::new();
    for line in lines {
        let cleaned = normalize_line(line.as_ref());
        if cleaned.trim_matches(is_separator).is_empty() {
            continue;
        }
        tokens.extend(
            cleaned
                .split(is_separator)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
    }
    tokens
}

/// Tokenize a block of text, treating each line separately.
pub fn tokenize_text(text: &str) -> Vec<String> {
    tokenize(text.lines())
}
