use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// Put the configured instruction in front of a chunk, separated by a blank line.
#[must_use]
pub fn build_chunk_prompt(instruction: &str, chunk: &str) -> String {
    format!("{instruction}\n\n{chunk}")
}

/// Wrap a prompt as the single user turn of a chat completion request.
#[must_use]
pub fn build_chat_messages(prompt: &str) -> Vec<ChatCompletionMessage> {
    vec![ChatCompletionMessage {
        role: MessageRole::user,
        content: Content::Text(prompt.to_string()),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }]
}
