use std::fmt;

use serde::Serialize;

const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("chinese", "zh"),
    ("mandarin", "zh"),
    ("hindi", "hi"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("malayalam", "ml"),
    ("english", "en"),
];

/// Languages accepted as translation targets and explicit translation sources.
pub const SUPPORTED_LANGUAGES: [&str; 20] = [
    "en", "hi", "ta", "te", "ml", "mr", "bn", "kn", "gu", "pa", "or", "ur", "fr", "de", "es",
    "ru", "ar", "ja", "ko", "zh",
];

pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// A normalized, lowercase language identifier.
///
/// The only ways to obtain one are [`LanguageCode::normalize`] and
/// [`LanguageCode::target_or_default`], so raw user or engine input never
/// reaches a comparison or an engine call unnormalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Maps an arbitrary identifier ("  EN ", "Hindi", "zh-CN") to a short code.
    ///
    /// Two-character input is passed through without checking it against
    /// [`SUPPORTED_LANGUAGES`]; callers validate separately.
    pub fn normalize(raw: Option<&str>) -> Option<Self> {
        let code = raw?.trim().to_lowercase();
        if code.is_empty() {
            return None;
        }

        if code.chars().count() == 2 {
            return Some(Self(code));
        }

        if let Some((_, mapped)) = LANGUAGE_ALIASES.iter().find(|(name, _)| *name == code) {
            return Some(Self((*mapped).to_string()));
        }

        Some(Self(code.chars().take(2).collect()))
    }

    /// Resolves a requested target language, falling back to English when the
    /// request is blank or names a language outside the supported set.
    pub fn target_or_default(raw: Option<&str>) -> Self {
        let code = raw
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string());

        if SUPPORTED_LANGUAGES.contains(&code.as_str()) {
            Self(code)
        } else {
            Self(DEFAULT_TARGET_LANGUAGE.to_string())
        }
    }

    pub fn is_supported(&self) -> bool {
        SUPPORTED_LANGUAGES.contains(&self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
