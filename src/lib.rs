//! chatsum - summarizes an exported chat transcript with an LLM.
//!
//! A run reads the export, keeps the messages sent between two days (in the
//! configured timezone), packs them into word-count-bounded chunks and asks the
//! model to summarize each chunk in turn. The chunk summaries are joined into
//! one report and written to a file.
//!
//! # Architecture
//!
//! - `transcript`: splits the export on `(YYYY-MM-DDTHH:MM:SS.sssZ)` delimiters
//! - `utils::filters`: date range selection
//! - `chunker`: word-count-bounded chunk assembly
//! - `ai`: the `Completion` capability and its `OpenAI` client
//! - `worker`: sequential orchestration and the end-to-end run
//!
//! # Example
//!
//! ```
//! use chatsum::chunker::chunk_messages;
//! use chatsum::core::models::SenderFallback;
//! use chatsum::transcript::parse_transcript;
//!
//! let text = "(2024-01-01T10:00:00.000Z) Alice: hi (2024-01-01T10:05:00.000Z) Bob: hello there";
//! let messages = parse_transcript(text, chrono_tz::UTC, SenderFallback::Passthrough).unwrap();
//! let chunks = chunk_messages(&messages, 10);
//! assert_eq!(chunks, vec!["MESSAGE: hi MESSAGE: hello there"]);
//! ```
pub mod ai;
pub mod chunker;
pub mod core;
pub mod errors;
pub mod transcript;
pub mod utils;
pub mod worker;

pub use ai::{Completion, LlmClient};
pub use errors::SummarizerError;

const DEFAULT_LOG_FILTER: &str = "chatsum=debug,info";

/// Configure structured logging.
///
/// Log levels come from `RUST_LOG` when set, otherwise debug output for this
/// crate and info for everything else. With `json` the events are emitted as
/// JSON lines. Calling it again once a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// chatsum::setup_logging(false);
/// ```
pub fn setup_logging(json: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
