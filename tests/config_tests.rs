use chatsum::core::config::AppConfig;
use chatsum::core::models::SenderFallback;
use chatsum::errors::SummarizerError;

const FULL_CONFIG: &str = r#"
[openai]
api_key = "sk-test"
prompt = "Summarize the following WhatsApp group chat:"
base_url = "http://localhost:8080/v1"
request_timeout_secs = 30

[summarizer]
max_word_count = 1500
timezone = "Asia/Jerusalem"
sender_fallback = "offset"
"#;

#[test]
fn test_load_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, FULL_CONFIG).unwrap();

    let config = AppConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.summarizer.max_word_count, 1500);
    assert_eq!(config.summarizer.sender_fallback, SenderFallback::Offset);
    assert_eq!(config.openai.base_url, "http://localhost:8080/v1");
    assert_eq!(config.openai.request_timeout_secs, 30);
    assert_eq!(config.timezone().unwrap(), chrono_tz::Asia::Jerusalem);
    assert!(config.api_key().is_ok());
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    match err {
        SummarizerError::ConfigError(msg) => assert!(msg.contains("absent.toml")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[test]
fn test_missing_section_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[openai]\nprompt = \"Summarize\"\n").unwrap();

    assert!(matches!(
        AppConfig::load(Some(path.as_path())),
        Err(SummarizerError::ConfigError(_))
    ));
}

#[test]
fn test_missing_api_key_rejected_by_validate() {
    let text = FULL_CONFIG.replace("api_key = \"sk-test\"\n", "");
    let config: AppConfig = text.parse().unwrap();
    let err = config.api_key().unwrap_err();
    assert!(err.to_string().contains("OPENAI_API_KEY"));
    assert!(config.validate().is_err());
}

#[test]
fn test_blank_prompt_rejected() {
    let text = FULL_CONFIG.replace(
        "prompt = \"Summarize the following WhatsApp group chat:\"",
        "prompt = \"   \"",
    );
    let config: AppConfig = text.parse().unwrap();
    assert!(config.validate().unwrap_err().to_string().contains("prompt"));
}
