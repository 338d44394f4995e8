//! OpenAI-Compatible Provider Model Definitions
//!
//! Model constants and discovery filters for the OpenAI-compatible providers.

/// `OpenAI` model constants
pub mod openai {
    pub const GPT_4O: &str = "gpt-4o";
    pub const GPT_4O_MINI: &str = "gpt-4o-mini";
    pub const GPT_4_TURBO: &str = "gpt-4-turbo";
    pub const GPT_3_5_TURBO: &str = "gpt-3.5-turbo";

    /// Fallback list when `/models` is unavailable.
    pub const DEFAULTS: &[&str] = &[GPT_4O, GPT_4O_MINI, GPT_4_TURBO, GPT_3_5_TURBO];

    const CHAT_PREFIXES: &[&str] = &["gpt-", "o1", "o3", "o4", "chatgpt-"];

    /// `/models` also lists embeddings, audio and image models; keep the chat ones.
    pub fn is_chat_model(id: &str) -> bool {
        CHAT_PREFIXES.iter().any(|p| id.starts_with(p))
    }
}

/// `DeepSeek` model constants
pub mod deepseek {
    /// `DeepSeek` Chat model
    pub const CHAT: &str = "deepseek-chat";
    /// `DeepSeek` Reasoner model
    pub const REASONER: &str = "deepseek-reasoner";

    pub const DEFAULTS: &[&str] = &[CHAT, REASONER];

    /// Every listed model is a chat model.
    pub fn is_chat_model(_id: &str) -> bool {
        true
    }
}

/// Doubao (Volcengine Ark) model constants
pub mod doubao {
    pub const LITE_32K: &str = "doubao-lite-32k";
    pub const PRO_32K: &str = "doubao-pro-32k";
    pub const PRO_128K: &str = "doubao-pro-128k";

    pub const DEFAULTS: &[&str] = &[LITE_32K, PRO_32K, PRO_128K];
}

/// Zhipu GLM model constants
pub mod zhipu {
    pub const GLM_4_FLASH: &str = "glm-4-flash";
    pub const GLM_4_AIR: &str = "glm-4-air";
    pub const GLM_4: &str = "glm-4";
    pub const GLM_4_PLUS: &str = "glm-4-plus";

    pub const DEFAULTS: &[&str] = &[GLM_4_FLASH, GLM_4_AIR, GLM_4, GLM_4_PLUS];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openai_filter_keeps_chat_families_only() {
        for id in ["gpt-4o", "o1-mini", "o3", "o4-mini", "chatgpt-4o-latest"] {
            assert!(openai::is_chat_model(id), "{id}");
        }
        for id in ["text-embedding-3-small", "whisper-1", "dall-e-3", "tts-1"] {
            assert!(!openai::is_chat_model(id), "{id}");
        }
    }
}
