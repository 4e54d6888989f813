//! Word tokenization.

/// Splits text into lowercase word tokens.
///
/// The text is lowercased and every character outside `[a-z0-9 '-]` becomes a
/// space. Hyphens and apostrophes survive only inside a token (so `don't` and
/// `well-known` stay whole, while `'quoted'` and `--` lose them), and tokens of
/// one character or fewer are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '\'' | '-' => c,
            _ => ' ',
        })
        .collect();

    normalized
        .split_whitespace()
        .map(|token| token.trim_matches(|c| c == '\'' || c == '-'))
        .filter(|token| token.len() > 1)
        .map(str::to_string)
        .collect()
}
