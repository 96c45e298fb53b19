use thiserror::Error;

use crate::models::Emotion;

#[derive(Debug, Clone, Error)]
#[error("emotion model failed: {0}")]
pub struct EmotionModelError(pub String);

/// Raw single-label output of the underlying classifier, in the model's own
/// taxonomy. Normalization into the four reply buckets happens in
/// [`Emotion::from_model_label`].
#[derive(Debug, Clone)]
pub struct EmotionPrediction {
    pub label: String,
    pub confidence: f32,
    pub model: &'static str,
}

/// Seam for the external single-label text classifier. Errors here are NOT
/// recovered anywhere in the pipeline; they propagate to the caller.
pub trait EmotionModel: Send + Sync {
    fn classify(&self, text: &str) -> Result<EmotionPrediction, EmotionModelError>;
}

impl Emotion {
    /// Total adapter from the model taxonomy to the four reply buckets.
    /// Every label, recognized or not, lands in exactly one bucket; Happy
    /// is the catch-all (joy, neutral, surprise, garbage).
    pub fn from_model_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "anger" | "angry" => Self::Angry,
            "sadness" | "sad" => Self::Sad,
            "confusion" | "disgust" | "fear" => Self::Confused,
            _ => Self::Happy,
        }
    }
}
