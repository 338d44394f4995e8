//! Provider identifiers

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UnsupportedProvider;

/// Every provider identity an adapter can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    OpenAi,
    Gemini,
    DeepSeek,
    Doubao,
    /// Alibaba DashScope (Qwen models).
    Qwen,
    /// Zhipu GLM; OpenAI-compatible, built directly rather than via the factory.
    Zhipu,
}

impl ProviderId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
            Self::DeepSeek => "deepseek",
            Self::Doubao => "doubao",
            Self::Qwen => "qwen",
            Self::Zhipu => "zhipu",
        }
    }

    /// Prefix for `<PREFIX>_API_KEY` / `<PREFIX>_BASE_URL` lookups.
    pub const fn env_prefix(&self) -> &'static str {
        match self {
            Self::OpenAi => "OPENAI",
            Self::Gemini => "GEMINI",
            Self::DeepSeek => "DEEPSEEK",
            Self::Doubao => "DOUBAO",
            Self::Qwen => "DASHSCOPE",
            Self::Zhipu => "ZHIPU",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = UnsupportedProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            "deepseek" => Ok(Self::DeepSeek),
            "doubao" => Ok(Self::Doubao),
            "qwen" => Ok(Self::Qwen),
            "zhipu" => Ok(Self::Zhipu),
            _ => Err(UnsupportedProvider(s.to_string())),
        }
    }
}
