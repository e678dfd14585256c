use std::sync::Arc;

use crate::application::ports::{TranslationEngine, TranslationError};
use crate::domain::{LanguageCode, SourceLanguage, TranslationOutcome};

use super::translation_quality::looks_suspect;

/// Engine calls the orchestrator may make for one request, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Attempt {
    Primary(SourceLanguage),
    AutomaticFallback,
}

impl Attempt {
    fn source(&self) -> SourceLanguage {
        match self {
            Self::Primary(source) => source.clone(),
            Self::AutomaticFallback => SourceLanguage::Automatic,
        }
    }

    fn number(&self) -> u8 {
        match self {
            Self::Primary(_) => 1,
            Self::AutomaticFallback => 2,
        }
    }
}

/// Best result held while a fallback attempt runs.
struct Candidate {
    text: String,
    source: SourceLanguage,
}

/// Runs a translation with at most one automatic-source retry.
///
/// The retry happens when the first call fails, or when it succeeds with
/// output that [`looks_suspect`] and the first call named an explicit
/// source. Retries are immediate.
pub struct TranslationOrchestrator {
    engine: Arc<dyn TranslationEngine>,
}

impl TranslationOrchestrator {
    pub fn new(engine: Arc<dyn TranslationEngine>) -> Self {
        Self { engine }
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
        resolved_source: Option<&LanguageCode>,
    ) -> TranslationOutcome {
        let primary = Attempt::Primary(SourceLanguage::from_resolved(resolved_source));

        let outcome = match self.attempt(text, target, &primary).await {
            Ok(translated) => self.review(text, target, &primary, translated).await,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    source = %primary.source(),
                    "Translation failed, retrying with automatic source"
                );
                self.recover(text, target).await
            }
        };

        match &outcome {
            TranslationOutcome::Accepted { source, attempts, .. } => {
                tracing::info!(%source, attempts, "Translation accepted");
            }
            TranslationOutcome::Suspect { source, attempts, .. } => {
                tracing::info!(%source, attempts, "Returning translation that echoes its input");
            }
            TranslationOutcome::Failed { reason, attempts } => {
                tracing::warn!(reason = %reason, attempts, "No translation produced");
            }
        }

        outcome
    }

    async fn attempt(
        &self,
        text: &str,
        target: &LanguageCode,
        attempt: &Attempt,
    ) -> Result<String, TranslationError> {
        let source = attempt.source();
        tracing::debug!(attempt = attempt.number(), %source, %target, "Calling translation engine");
        self.engine.translate(text, &source, target).await
    }

    async fn review(
        &self,
        text: &str,
        target: &LanguageCode,
        primary: &Attempt,
        translated: String,
    ) -> TranslationOutcome {
        let source = primary.source();

        if !looks_suspect(text, &translated) {
            return TranslationOutcome::Accepted {
                text: translated,
                source,
                attempts: primary.number(),
            };
        }

        let candidate = Candidate {
            text: translated,
            source,
        };

        if candidate.source.is_automatic() {
            return TranslationOutcome::Suspect {
                text: candidate.text,
                source: candidate.source,
                attempts: primary.number(),
            };
        }

        let fallback = Attempt::AutomaticFallback;
        match self.attempt(text, target, &fallback).await {
            Ok(alternate) if !looks_suspect(text, &alternate) => TranslationOutcome::Accepted {
                text: alternate,
                source: fallback.source(),
                attempts: fallback.number(),
            },
            Ok(_) => TranslationOutcome::Suspect {
                text: candidate.text,
                source: candidate.source,
                attempts: fallback.number(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Automatic source fallback failed, keeping first result");
                TranslationOutcome::Suspect {
                    text: candidate.text,
                    source: candidate.source,
                    attempts: fallback.number(),
                }
            }
        }
    }

    async fn recover(&self, text: &str, target: &LanguageCode) -> TranslationOutcome {
        let fallback = Attempt::AutomaticFallback;
        match self.attempt(text, target, &fallback).await {
            Ok(translated) if looks_suspect(text, &translated) => TranslationOutcome::Suspect {
                text: translated,
                source: fallback.source(),
                attempts: fallback.number(),
            },
            Ok(translated) => TranslationOutcome::Accepted {
                text: translated,
                source: fallback.source(),
                attempts: fallback.number(),
            },
            Err(e) => TranslationOutcome::Failed {
                reason: e.to_string(),
                attempts: fallback.number(),
            },
        }
    }
}
