//! Qwen model constants

pub const QWEN_TURBO: &str = "qwen-turbo";
pub const QWEN_PLUS: &str = "qwen-plus";
pub const QWEN_MAX: &str = "qwen-max";
pub const QWEN_LONG: &str = "qwen-long";

/// DashScope has no model listing endpoint; this is always the answer.
pub const DEFAULTS: &[&str] = &[QWEN_TURBO, QWEN_PLUS, QWEN_MAX, QWEN_LONG];
