use chrono::NaiveDate;

use crate::core::models::Message;
use crate::errors::SummarizerError;

/// Layout of the start/end day arguments.
pub const DAY_ARG_FORMAT: &str = "%d/%m/%Y";

/// Keeps messages dated within `[start_day, end_day]`, inclusive.
///
/// Transcripts are append-only, so messages are assumed to be in ascending date
/// order: scanning stops at the first message dated after `end_day`, and
/// anything following it is dropped even if it would match.
#[must_use]
pub fn filter_messages_by_dates(
    messages: &[Message],
    start_day: NaiveDate,
    end_day: NaiveDate,
) -> Vec<Message> {
    messages
        .iter()
        .take_while(|msg| msg.date <= end_day)
        .filter(|msg| msg.date >= start_day)
        .cloned()
        .collect()
}

/// Parse a `DD/MM/YYYY` day argument. Surrounding whitespace is rejected.
///
/// # Errors
///
/// Returns `ParseError` if the string is not a valid date in that layout.
pub fn parse_day_arg(day: &str) -> Result<NaiveDate, SummarizerError> {
    NaiveDate::parse_from_str(day, DAY_ARG_FORMAT)
        .map_err(|e| SummarizerError::ParseError(format!("invalid date '{day}' (expected DD/MM/YYYY): {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_day_arg() {
        assert_eq!(parse_day_arg("05/03/2024").unwrap(), day(2024, 3, 5));
        assert!(parse_day_arg("2024-03-05").is_err());
        assert!(parse_day_arg("31/02/2024").is_err());
    }

    #[test]
    fn test_stops_at_first_message_past_range() {
        let messages = vec![
            Message::new(day(2024, 1, 1), "a"),
            Message::new(day(2024, 1, 3), "b"),
            Message::new(day(2024, 1, 2), "c"),
        ];
        let kept = filter_messages_by_dates(&messages, day(2024, 1, 1), day(2024, 1, 2));
        assert_eq!(kept, vec![Message::new(day(2024, 1, 1), "a")]);
    }
}
