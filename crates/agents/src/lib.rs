use std::sync::Arc;
use std::time::Instant;

use askbot_core::{
    classify_intent, decide_locale, format_reply, normalize_text, respond, Emotion,
    EmotionModelError, LocaleMode, LocaleSource, QueryInput, ResolvedReply, SupportReply,
    ValidationError,
};
use askbot_ml::SupportMlStack;
use askbot_observability::AppMetrics;
use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum QueryError {
    /// Pre-pipeline input rejection. Non-fatal: surfaces as a warning to
    /// the user, not as a server failure.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Emotion-model failure. Deliberately not recovered anywhere in the
    /// pipeline; callers see the request fail.
    #[error(transparent)]
    EmotionModel(#[from] EmotionModelError),
}

/// The response resolution pipeline: language detection, emotion
/// classification, intent classification, table lookup, formatting. One
/// instance serves all requests; nothing is carried across calls.
#[derive(Clone)]
pub struct SupportAgent {
    ml: SupportMlStack,
    metrics: Arc<AppMetrics>,
}

impl SupportAgent {
    pub fn new(ml: SupportMlStack, metrics: Arc<AppMetrics>) -> Self {
        Self { ml, metrics }
    }

    #[instrument(skip(self, input))]
    pub fn handle_query(&self, input: QueryInput) -> Result<SupportReply, QueryError> {
        let started = Instant::now();
        self.metrics.inc_request();

        let missing = input.missing_fields();
        if !missing.is_empty() {
            self.metrics.inc_rejected_input();
            warn!(fields = ?missing, "query rejected before pipeline");
            return Err(ValidationError { fields: missing }.into());
        }

        let mode = LocaleMode::from_optional_str(input.lang_mode.as_deref());
        let text = normalize_text(&input.text);

        let resolved = self.resolve(&text, mode)?;

        let user = input.user_context();
        let message = format_reply(&user, &resolved);
        let interaction_id = Uuid::new_v4().to_string();

        self.metrics.observe_latency(started.elapsed());
        info!(
            interaction_id = %interaction_id,
            locale = %resolved.locale.as_code(),
            emotion = ?resolved.emotion,
            intent = ?resolved.intent,
            "query handled"
        );

        Ok(SupportReply {
            interaction_id,
            resolved,
            message,
        })
    }

    /// The classification chain without formatting, for callers that only
    /// want the structured tuple.
    pub fn resolve(&self, text: &str, mode: LocaleMode) -> Result<ResolvedReply, QueryError> {
        let decision = decide_locale(mode, text, self.ml.language.as_ref());
        if decision.source == LocaleSource::DefaultFallback {
            self.metrics.inc_locale_fallback();
        }

        let prediction = self.ml.emotion.classify(text)?;
        self.metrics.inc_emotion_inference();
        let emotion = Emotion::from_model_label(&prediction.label);

        let intent = classify_intent(text);

        if respond::lookup(emotion, decision.locale).is_none() {
            self.metrics.inc_table_fallback();
        }

        Ok(respond::resolve(emotion, decision.locale, intent))
    }
}
