use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;

use serde::{Deserialize, Serialize};

/// LLM provider selection. The canvas app reads this from the environment,
/// so `from_env` is the default way to construct one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub provider: String,
    pub api_key: String,
    pub model: String,
}

impl ProviderConfig {
    pub fn from_env() -> ProviderConfig {
        ProviderConfig {
            provider: std::env::var("MVCFORGE_PROVIDER").unwrap_or_else(|_| "google".to_string()),
            api_key: std::env::var("MVCFORGE_API_KEY").unwrap_or_default(),
            model: std::env::var("MVCFORGE_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
        }
    }

    pub fn configured(&self) -> bool {
        !self.provider.is_empty()
            && !self.model.is_empty()
            && (self.provider == "ollama" || !self.api_key.is_empty())
    }
}

fn map_backend(provider: &str) -> Result<LLMBackend, String> {
    match provider {
        "openai" => Ok(LLMBackend::OpenAI),
        "anthropic" => Ok(LLMBackend::Anthropic),
        "google" => Ok(LLMBackend::Google),
        "ollama" => Ok(LLMBackend::Ollama),
        "groq" => Ok(LLMBackend::Groq),
        "mistral" => Ok(LLMBackend::Mistral),
        "deepseek" => Ok(LLMBackend::DeepSeek),
        other => Err(format!("unknown provider: {other}")),
    }
}

/// Single chat completion against the configured provider. No retry; a
/// failure surfaces as-is and the caller leaves the graph untouched.
pub async fn generate(
    cfg: &ProviderConfig,
    system: &str,
    user_msg: &str,
) -> Result<String, String> {
    let backend = map_backend(&cfg.provider)?;

    eprintln!("[mvcforge-gen] sending to {} ({})", cfg.provider, cfg.model);

    let mut builder = LLMBuilder::new()
        .backend(backend)
        .model(&cfg.model)
        .system(system);

    if !cfg.api_key.is_empty() {
        builder = builder.api_key(&cfg.api_key);
    }

    let llm = builder.build().map_err(|e| format!("build LLM: {e}"))?;

    let messages = vec![ChatMessage::user().content(user_msg).build()];

    let response = llm.chat(&messages).await.map_err(|e| format!("chat: {e}"))?;

    match response.text() {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err("LLM returned empty text".to_string()),
        None => Err("LLM returned no text".to_string()),
    }
}
