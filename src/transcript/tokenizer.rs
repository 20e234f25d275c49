use regex::Regex;

/// Matches the `(YYYY-MM-DDTHH:MM:SS.sssZ)` delimiter that opens every message.
pub const TIMESTAMP_PATTERN: &str =
    r"\([0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}Z\)";

static TIMESTAMP_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(TIMESTAMP_PATTERN).expect("timestamp regex compiles")
});

/// A timestamp delimiter paired with the text that follows it, up to the next
/// delimiter or the end of the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The delimiter including its parentheses.
    pub timestamp: &'a str,
    pub body: &'a str,
}

/// Split a raw transcript into `(timestamp, body)` tokens in input order.
///
/// Anything before the first timestamp is discarded.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let delimiters: Vec<_> = TIMESTAMP_RE.find_iter(text).collect();

    delimiters
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let body_end = delimiters.get(i + 1).map_or(text.len(), |next| next.start());
            Token {
                timestamp: m.as_str(),
                body: &text[m.end()..body_end],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_text_discarded() {
        let tokens = tokenize("header junk\n(2024-01-01T10:00:00.000Z) a: hi");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].timestamp, "(2024-01-01T10:00:00.000Z)");
        assert_eq!(tokens[0].body, " a: hi");
    }

    #[test]
    fn test_body_runs_until_next_timestamp() {
        let text = "(2024-01-01T10:00:00.000Z) a: one\nline two\n(2024-01-01T10:01:00.000Z) b: three";
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].body, " a: one\nline two\n");
        assert_eq!(tokens[1].body, " b: three");
    }

    #[test]
    fn test_near_miss_delimiters_ignored() {
        // Missing milliseconds, missing Z, no parentheses.
        let text = "(2024-01-01T10:00:00Z) x (2024-01-01T10:00:00.000) y 2024-01-01T10:00:00.000Z z";
        assert!(tokenize(text).is_empty());
    }

    #[test]
    fn test_non_ascii_digits_are_not_delimiters() {
        let text = "(2024-01-01T10:00:00.000Z) a: date was (٢٠٢٤-٠١-٠١T١٠:٠٠:٠٠.٠٠٠Z) ok";
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].body, " a: date was (٢٠٢٤-٠١-٠١T١٠:٠٠:٠٠.٠٠٠Z) ok");
    }

    #[test]
    fn test_empty_body_between_adjacent_timestamps() {
        let tokens = tokenize("(2024-01-01T10:00:00.000Z)(2024-01-01T10:00:01.000Z) b: x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].body, "");
    }
}
