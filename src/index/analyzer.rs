use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern compiles"));

/// Lowercased alphanumeric tokens of `text`, deduplicated.
///
/// Approximates the engine's standard analyzer closely enough for analyzed
/// `match` clauses and bare query-string terms.
pub fn analyze(text: &str) -> HashSet<String> {
    WORD.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Query-side tokens, in order and with duplicates kept.
pub fn analyze_query(query: &str) -> Vec<String> {
    WORD.find_iter(&query.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}
