use askbot_core::{EmotionModel, EmotionModelError, EmotionPrediction};

// Raw-taxonomy lexicons. Labels deliberately mirror the upstream emotion
// checkpoint's output space, not the four reply buckets; the adapter in
// askbot-core owns that collapse.
const ANGER_KW: &[&str] = &[
    "angry", "furious", "frustrat", "annoy", "unacceptable", "outrag", "ridiculous", "terrible",
    "worst", "fed up", "disgrace", "pathetic", "scam", "cheat",
];

const SADNESS_KW: &[&str] = &[
    "sad", "disappoint", "unhappy", "upset", "heartbroken", "miss", "regret", "unfortunate",
    "let down", "crying",
];

const FEAR_KW: &[&str] = &[
    "worried", "afraid", "scared", "anxious", "nervous", "panic", "urgent", "lost my",
];

const DISGUST_KW: &[&str] = &[
    "disgust", "gross", "awful", "horrible", "nasty",
];

const SURPRISE_KW: &[&str] = &[
    "surprised", "shocked", "unexpected", "can't believe", "wow",
];

const JOY_KW: &[&str] = &[
    "thank", "great", "awesome", "love", "happy", "glad", "perfect", "amazing", "excellent",
    "wonderful",
];

const LEXICONS: &[(&str, &[&str])] = &[
    ("anger", ANGER_KW),
    ("sadness", SADNESS_KW),
    ("fear", FEAR_KW),
    ("disgust", DISGUST_KW),
    ("surprise", SURPRISE_KW),
    ("joy", JOY_KW),
];

/// Keyword-lexicon stand-in for the hosted emotion checkpoint: single best
/// label from the raw taxonomy, highest hit count wins, neutral when nothing
/// matches. Errors on empty input the way the real tokenizer does.
#[derive(Debug, Clone, Default)]
pub struct LexiconEmotionModel;

impl EmotionModel for LexiconEmotionModel {
    fn classify(&self, text: &str) -> Result<EmotionPrediction, EmotionModelError> {
        let lower = text.trim().to_lowercase();
        if lower.is_empty() {
            return Err(EmotionModelError("empty input text".to_string()));
        }

        let mut best: Option<(&'static str, usize)> = None;
        let mut total_hits = 0usize;

        for (label, keywords) in LEXICONS {
            let hits = keywords.iter().filter(|kw| lower.contains(**kw)).count();
            total_hits += hits;
            if hits > 0 && best.map_or(true, |(_, best_hits)| hits > best_hits) {
                best = Some((label, hits));
            }
        }

        let prediction = match best {
            Some((label, hits)) => EmotionPrediction {
                label: label.to_string(),
                confidence: hits as f32 / total_hits as f32,
                model: "lexicon-emotion",
            },
            None => EmotionPrediction {
                label: "neutral".to_string(),
                confidence: 0.5,
                model: "lexicon-emotion",
            },
        };

        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frustration_reads_as_anger() {
        let model = LexiconEmotionModel;
        let prediction = model
            .classify("I want a refund, this is so frustrating")
            .unwrap();
        assert_eq!(prediction.label, "anger");
        assert!(prediction.confidence > 0.0);
    }

    #[test]
    fn unmatched_text_is_neutral() {
        let model = LexiconEmotionModel;
        let prediction = model.classify("where is my order").unwrap();
        assert_eq!(prediction.label, "neutral");
    }

    #[test]
    fn empty_input_is_a_model_error() {
        let model = LexiconEmotionModel;
        assert!(model.classify("   ").is_err());
    }
}
