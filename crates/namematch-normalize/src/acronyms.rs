//! Acronym derivation and recognition.

use std::sync::LazyLock;

use regex::Regex;

static ACRONYM_SEPARATORS: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"[.\s]+"));

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// First letter of each non-numeric token, when there are at least two such
/// tokens and the result is at least `min_length` long.
pub fn derive_acronym(tokens: &[String], min_length: usize) -> Option<String> {
    let letters: String = tokens
        .iter()
        .filter(|t| !is_numeric(t))
        .filter_map(|t| t.chars().next())
        .flat_map(char::to_lowercase)
        .collect();
    let words = tokens.iter().filter(|t| !is_numeric(t)).count();
    (words >= 2 && letters.chars().count() >= min_length).then_some(letters)
}

/// Recognize acronym-shaped input: single letters separated by dots or
/// whitespace (`I.B.M.`, `I B M`). Returns the lower-case letters.
pub fn acronym_from_input(original: &str, min_length: usize) -> Option<String> {
    let separators = ACRONYM_SEPARATORS.as_ref().ok()?;
    let mut letters = String::new();
    for part in separators.split(original.trim()).filter(|p| !p.is_empty()) {
        let mut chars = part.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => letters.extend(c.to_lowercase()),
            _ => return None,
        }
    }
    (letters.chars().count() >= min_length).then_some(letters)
}

/// A single alphabetic token written in capitals in the original (`IBM`,
/// `IBM Corp`) is taken as an acronym.
pub fn caps_word_acronym(original: &str, tokens: &[String], min_length: usize) -> Option<String> {
    let [token] = tokens else {
        return None;
    };
    if token.chars().count() < min_length || !token.chars().all(char::is_alphabetic) {
        return None;
    }
    original
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().any(char::is_alphabetic))
        .any(|w| w.to_lowercase() == *token && !w.chars().any(char::is_lowercase))
        .then(|| token.clone())
}
