use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;

use archivox_core::AiSettings;

use crate::{ChatRole, ChatTurn};

/// Providers the settings UI can name. Anything else is a configuration
/// error, surfaced before any request is made.
fn backend_for(provider: &str) -> Result<LLMBackend, String> {
    match provider {
        "openai" => Ok(LLMBackend::OpenAI),
        "anthropic" => Ok(LLMBackend::Anthropic),
        "google" => Ok(LLMBackend::Google),
        "ollama" => Ok(LLMBackend::Ollama),
        "groq" => Ok(LLMBackend::Groq),
        "mistral" => Ok(LLMBackend::Mistral),
        "deepseek" => Ok(LLMBackend::DeepSeek),
        other => Err(format!("unsupported provider: {other}")),
    }
}

/// One chat completion: system prompt, prior turns, then this turn's message.
pub async fn generate(
    settings: &AiSettings,
    system: &str,
    history: &[ChatTurn],
    user_msg: &str,
) -> Result<String, String> {
    let backend = backend_for(&settings.provider)?;

    let mut builder = LLMBuilder::new()
        .backend(backend)
        .model(&settings.model)
        .system(system);

    if !settings.api_key.is_empty() {
        builder = builder.api_key(&settings.api_key);
    }

    let llm = builder.build().map_err(|e| format!("build LLM: {e}"))?;

    let mut messages = Vec::with_capacity(history.len() + 1);
    for turn in history {
        let message = match turn.role {
            ChatRole::User => ChatMessage::user().content(turn.content.as_str()).build(),
            ChatRole::Assistant => ChatMessage::assistant()
                .content(turn.content.as_str())
                .build(),
        };
        messages.push(message);
    }
    messages.push(ChatMessage::user().content(user_msg).build());

    let response = llm.chat(&messages).await.map_err(|e| format!("chat: {e}"))?;

    match response.text() {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err("provider returned empty text".to_string()),
        None => Err("provider returned no text".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_providers_map_to_backends() {
        for provider in [
            "openai",
            "anthropic",
            "google",
            "ollama",
            "groq",
            "mistral",
            "deepseek",
        ] {
            assert!(backend_for(provider).is_ok(), "{provider} should map");
        }
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let err = backend_for("telegraph").unwrap_err();
        assert_eq!(err, "unsupported provider: telegraph");
    }
}
