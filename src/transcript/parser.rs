use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::tokenizer::{Token, tokenize};
use crate::core::models::{MESSAGE_TAG, Message, SenderFallback};
use crate::errors::SummarizerError;

/// Layout of a delimiter once its parentheses are removed.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const SENDER_SEPARATOR: &str = ": ";

/// Parse a raw transcript into messages dated in `tz`.
///
/// # Errors
///
/// Returns `ParseError` on the first timestamp that matches the delimiter
/// pattern but is not a valid date-time (e.g. month 13). No messages are
/// returned in that case.
pub fn parse_transcript(
    text: &str,
    tz: Tz,
    fallback: SenderFallback,
) -> Result<Vec<Message>, SummarizerError> {
    tokenize(text)
        .into_iter()
        .map(|token| parse_token(token, tz, fallback))
        .collect()
}

fn parse_token(token: Token<'_>, tz: Tz, fallback: SenderFallback) -> Result<Message, SummarizerError> {
    let date = local_date(token.timestamp, tz)?;
    Ok(Message::new(date, strip_sender(token.body, fallback)))
}

/// Convert a `(YYYY-MM-DDTHH:MM:SS.sssZ)` delimiter to the calendar date it
/// falls on in `tz`.
///
/// # Errors
///
/// Returns `ParseError` if the text is not a valid UTC timestamp.
pub fn local_date(timestamp: &str, tz: Tz) -> Result<NaiveDate, SummarizerError> {
    let inner = timestamp
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(timestamp);

    let naive = NaiveDateTime::parse_from_str(inner, TIMESTAMP_FORMAT).map_err(|e| {
        SummarizerError::ParseError(format!("invalid message timestamp {timestamp}: {e}"))
    })?;

    Ok(Utc
        .from_utc_datetime(&naive)
        .with_timezone(&tz)
        .date_naive())
}

/// Replace the `sender: ` prefix of a message body with [`MESSAGE_TAG`].
#[must_use]
pub fn strip_sender(body: &str, fallback: SenderFallback) -> String {
    let rest = match body.find(SENDER_SEPARATOR) {
        Some(idx) => &body[idx + SENDER_SEPARATOR.len()..],
        None => match fallback {
            SenderFallback::Passthrough => body,
            SenderFallback::Offset => body.char_indices().nth(2).map_or("", |(i, _)| &body[i..]),
        },
    };
    format!("{MESSAGE_TAG}{rest}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_sender_uses_first_separator() {
        assert_eq!(
            strip_sender(" Alice: re: lunch", SenderFallback::Passthrough),
            "MESSAGE: re: lunch"
        );
    }

    #[test]
    fn test_strip_sender_without_separator() {
        assert_eq!(
            strip_sender(" joined the group", SenderFallback::Passthrough),
            "MESSAGE:  joined the group"
        );
        assert_eq!(
            strip_sender(" joined the group", SenderFallback::Offset),
            "MESSAGE: oined the group"
        );
        assert_eq!(strip_sender("x", SenderFallback::Offset), "MESSAGE: ");
    }

    #[test]
    fn test_offset_fallback_respects_char_boundaries() {
        assert_eq!(strip_sender("äöü", SenderFallback::Offset), "MESSAGE: ü");
    }

    #[test]
    fn test_local_date_crosses_midnight() {
        let date = local_date("(2024-01-01T23:30:00.000Z)", chrono_tz::Asia::Jerusalem).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

        let date = local_date("(2024-01-01T23:30:00.000Z)", chrono_tz::America::New_York).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_local_date_rejects_impossible_values() {
        let err = local_date("(2024-13-01T10:00:00.000Z)", chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, SummarizerError::ParseError(_)));
    }
}
