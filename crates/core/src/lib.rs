pub mod detect;
pub mod emotion;
pub mod intent;
pub mod models;
pub mod respond;

pub use detect::{
    decide_locale, detect_locale, normalize_text, LanguageIdent, LanguageIdentError,
    LocaleDecision, LocaleSource,
};
pub use emotion::{EmotionModel, EmotionModelError, EmotionPrediction};
pub use intent::classify_intent;
pub use models::*;
pub use respond::{format_reply, lookup, resolve, resolve_reply, FALLBACK_REPLY};
