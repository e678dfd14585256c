use std::fmt;

use super::language_code::LanguageCode;

/// Source language parameter handed to a translation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLanguage {
    Explicit(LanguageCode),
    Automatic,
}

impl SourceLanguage {
    /// Uses the resolved language only when it is a supported code.
    pub fn from_resolved(resolved: Option<&LanguageCode>) -> Self {
        match resolved {
            Some(code) if code.is_supported() => Self::Explicit(code.clone()),
            _ => Self::Automatic,
        }
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self, Self::Automatic)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Explicit(code) => code.as_str(),
            Self::Automatic => "auto",
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text translation request with its target validated and hint normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    pub text: String,
    pub target: LanguageCode,
    pub source_hint: Option<LanguageCode>,
}

impl TranslationRequest {
    pub fn new(text: &str, target: Option<&str>, source_hint: Option<&str>) -> Self {
        Self {
            text: text.trim().to_string(),
            target: LanguageCode::target_or_default(target),
            source_hint: LanguageCode::normalize(source_hint),
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Result of running the translation fallback policy.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    /// The engine produced output that passed the quality check.
    Accepted {
        text: String,
        source: SourceLanguage,
        attempts: u8,
    },
    /// Output that still looks like an echo of the input. Kept because the
    /// quality check is only a heuristic.
    Suspect {
        text: String,
        source: SourceLanguage,
        attempts: u8,
    },
    /// Every attempt failed.
    Failed { reason: String, attempts: u8 },
}

impl TranslationOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Accepted { text, .. } | Self::Suspect { text, .. } => Some(text),
            Self::Failed { .. } => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Accepted { text, .. } | Self::Suspect { text, .. } => Some(text),
            Self::Failed { .. } => None,
        }
    }

    pub fn attempts(&self) -> u8 {
        match self {
            Self::Accepted { attempts, .. }
            | Self::Suspect { attempts, .. }
            | Self::Failed { attempts, .. } => *attempts,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
