//! Gemini model constants

pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";
pub const GEMINI_1_5_PRO: &str = "gemini-1.5-pro";
pub const GEMINI_1_5_FLASH: &str = "gemini-1.5-flash";

/// Fallback list when model discovery fails.
pub const DEFAULTS: &[&str] = &[GEMINI_2_0_FLASH, GEMINI_1_5_PRO, GEMINI_1_5_FLASH];
