use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse input: {0}")]
    ParseError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to read or write file: {0}")]
    IoError(String),
}

impl From<std::io::Error> for SummarizerError {
    fn from(error: std::io::Error) -> Self {
        SummarizerError::IoError(error.to_string())
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::HttpError(error.to_string())
    }
}

impl From<toml::de::Error> for SummarizerError {
    fn from(error: toml::de::Error) -> Self {
        SummarizerError::ConfigError(error.to_string())
    }
}

impl From<chrono::ParseError> for SummarizerError {
    fn from(error: chrono::ParseError) -> Self {
        SummarizerError::ParseError(error.to_string())
    }
}
