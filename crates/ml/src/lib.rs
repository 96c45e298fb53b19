mod langid;
mod lexicon;

use std::sync::Arc;

use askbot_core::{EmotionModel, LanguageIdent};

pub use langid::ScriptLanguageIdent;
pub use lexicon::LexiconEmotionModel;

/// The classifier bundle the pipeline consumes. Constructed once at process
/// start and passed in explicitly; nothing here is ambient global state.
#[derive(Clone)]
pub struct SupportMlStack {
    pub emotion: Arc<dyn EmotionModel>,
    pub language: Arc<dyn LanguageIdent>,
}

impl SupportMlStack {
    pub fn new(emotion: Arc<dyn EmotionModel>, language: Arc<dyn LanguageIdent>) -> Self {
        Self { emotion, language }
    }

    pub fn load_default() -> Self {
        Self {
            emotion: Arc::new(LexiconEmotionModel),
            language: Arc::new(ScriptLanguageIdent),
        }
    }
}
