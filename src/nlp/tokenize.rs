//! Tokenization for frequency scoring.
//!
//! Normalization is deliberately crude: anything that is not a letter, digit,
//! or underscore becomes a space, then the text splits on whitespace runs.
//! Hyphenated and punctuated forms therefore break apart ("state-of-the-art"
//! yields four tokens), matching the behavior the scorers were tuned against.

/// Lowercase `text` and replace every non-alphanumeric, non-underscore
/// character with a space.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect()
}

/// Split `text` into lowercase word tokens.
///
/// Empty input produces an empty vector; there are no empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases() {
        let tokens = tokenize("Machine Learning");
        assert_eq!(tokens, ["machine", "learning"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokens = tokenize("reads, writes & deletes.");
        assert_eq!(tokens, ["reads", "writes", "deletes"]);
    }

    #[test]
    fn test_tokenize_splits_hyphens() {
        let tokens = tokenize("state-of-the-art");
        assert_eq!(tokens, ["state", "of", "the", "art"]);
    }

    #[test]
    fn test_tokenize_keeps_underscores_and_digits() {
        let tokens = tokenize("web3 snake_case");
        assert_eq!(tokens, ["web3", "snake_case"]);
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n  ").is_empty());
        assert!(tokenize("!!! ... ???").is_empty());
    }

    #[test]
    fn test_no_empty_tokens() {
        for token in tokenize("  hello -- world  ") {
            assert!(!token.is_empty());
        }
    }
}
