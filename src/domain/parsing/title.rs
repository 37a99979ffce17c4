//! Title detection for academic papers
//!
//! Titles sit at the very top of the text and are followed by author,
//! affiliation or section-header lines. Detection scans a few leading lines,
//! stops at the first line that looks like such noise, and rejects candidates
//! outside a plausible length band.

use once_cell::sync::Lazy;
use regex::Regex;

/// Raw lines inspected at the top of the document
pub const MAX_SCANNED_LINES: usize = 10;
/// Non-empty lines examined before giving up
pub const MAX_EXAMINED_LINES: usize = 3;
/// Accepted title length, in characters
pub const MIN_TITLE_CHARS: usize = 10;
pub const MAX_TITLE_CHARS: usize = 120;

const MIN_LINE_CHARS: usize = 5;
const MAX_NAME_LIST_CHARS: usize = 80;

const HEADER_LINES: [&str; 3] = ["abstract", "introduction", "keywords"];
const AUTHOR_PREFIXES: [&str; 4] = ["author", "email", "university", "department"];
const AFFILIATION_WORDS: [&str; 4] = ["research", "institute", "lab", "group"];
const DOMAIN_SUFFIXES: [&str; 3] = [".com", ".edu", ".org"];

static KEYWORDS_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^keywords?\s*:").unwrap());

static AUTHORS_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^authors?\s*:").unwrap());

/// "John Smith¹, Jane Doe², Robert Johnson³"
static NAME_LIST: Lazy<Regex> = Lazy::new(|| {
    let word = r"\p{Lu}[\p{L}.'\-]*[\p{No}\d*†‡]*";
    let name = format!(r"{word}(?:\s+{word}){{0,3}}");
    Regex::new(&format!(r"^{name}(?:\s*,\s*(?:and\s+)?{name})+,?$")).unwrap()
});

/// "John Doe"
static PERSON_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Lu}\p{Ll}+\s+\p{Lu}\p{Ll}+[\p{No}\d*†‡]*$").unwrap());

/// Guess the paper title from the top of the extracted text
pub fn detect_title(text: &str) -> Option<String> {
    let mut title_lines: Vec<&str> = Vec::new();
    let mut examined = 0;

    for raw in text.split('\n').take(MAX_SCANNED_LINES) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        examined += 1;

        if is_title_terminator(line) {
            break;
        }

        if line.chars().count() > MIN_LINE_CHARS
            && !DOMAIN_SUFFIXES.iter().any(|s| line.ends_with(s))
        {
            title_lines.push(line);
        }

        if examined >= MAX_EXAMINED_LINES {
            break;
        }
    }

    let combined = title_lines.join(" ");
    let length = combined.chars().count();

    (MIN_TITLE_CHARS..=MAX_TITLE_CHARS)
        .contains(&length)
        .then_some(combined)
}

/// Whether a trimmed line marks the end of the title block
fn is_title_terminator(line: &str) -> bool {
    let lower = line.to_lowercase();

    HEADER_LINES.contains(&lower.as_str())
        || KEYWORDS_PREFIX.is_match(&lower)
        || line.contains('@')
        || AUTHOR_PREFIXES.iter().any(|p| lower.starts_with(p))
        || AFFILIATION_WORDS.iter().any(|w| lower.contains(w))
        || AUTHORS_PREFIX.is_match(&lower)
        || is_name_list(line)
        || PERSON_NAME.is_match(line)
}

fn is_name_list(line: &str) -> bool {
    line.chars().count() <= MAX_NAME_LIST_CHARS && NAME_LIST.is_match(line)
}
