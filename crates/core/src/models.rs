use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Hi,
}

impl Locale {
    pub fn as_code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Human-readable label used in the formatted reply block.
    pub fn display_label(self) -> &'static str {
        match self {
            Self::En => "English 🇬🇧",
            Self::Hi => "Hindi 🇮🇳",
        }
    }
}

/// Language selector exposed on the input surface. `Auto` defers to
/// detection; the other two force the locale unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleMode {
    Auto,
    English,
    Hindi,
}

impl LocaleMode {
    pub fn from_optional_str(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "en" || v == "english" => Self::English,
            Some(v) if v == "hi" || v == "hindi" => Self::Hindi,
            _ => Self::Auto,
        }
    }

    pub fn forced_locale(self) -> Option<Locale> {
        match self {
            Self::Auto => None,
            Self::English => Some(Locale::En),
            Self::Hindi => Some(Locale::Hi),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Angry,
    Sad,
    Confused,
    Happy,
}

impl Emotion {
    pub fn name(self) -> &'static str {
        match self {
            Self::Angry => "Angry",
            Self::Sad => "Sad",
            Self::Confused => "Confused",
            Self::Happy => "Happy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Refund,
    Complaint,
    Order,
    Cancel,
    General,
}

impl Intent {
    pub fn name(self) -> &'static str {
        match self {
            Self::Refund => "Refund",
            Self::Complaint => "Complaint",
            Self::Order => "Order",
            Self::Cancel => "Cancel",
            Self::General => "General",
        }
    }

    /// Lowercased form used in the closing line of the reply block.
    pub fn lower_name(self) -> &'static str {
        match self {
            Self::Refund => "refund",
            Self::Complaint => "complaint",
            Self::Order => "order",
            Self::Cancel => "cancel",
            Self::General => "general",
        }
    }
}

/// Opaque identity fields embedded verbatim into the reply. No validation
/// beyond non-emptiness, which happens before the pipeline runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    pub name: String,
    pub email: String,
    pub order_id: String,
}

/// The full input surface: four required free-text fields plus the
/// optional language selector (absent or unrecognized means auto).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryInput {
    pub name: String,
    pub text: String,
    pub email: String,
    pub order_id: String,
    pub lang_mode: Option<String>,
}

impl QueryInput {
    pub fn user_context(&self) -> UserContext {
        UserContext {
            name: self.name.clone(),
            email: self.email.clone(),
            order_id: self.order_id.clone(),
        }
    }

    /// Names of required fields that are empty after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.text.trim().is_empty() {
            missing.push("text");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.order_id.trim().is_empty() {
            missing.push("order_id");
        }
        missing
    }
}

/// The classification tuple computed per request, exposed before any
/// formatting so callers can consume it programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedReply {
    pub locale: Locale,
    pub emotion: Emotion,
    pub intent: Intent,
    pub reply_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportReply {
    pub interaction_id: String,
    pub resolved: ResolvedReply,
    pub message: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("required fields are empty: {}", fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}
