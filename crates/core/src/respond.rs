use crate::models::{Emotion, Intent, Locale, ResolvedReply, UserContext};

/// Fixed fallback for any (emotion, locale) pair the table does not cover.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't understand.";

/// Reply templates keyed by (emotion, locale). Kept as a const table so the
/// coverage is auditable at a glance.
const RESPONSE_TABLE: &[(Emotion, Locale, &str)] = &[
    (
        Emotion::Angry,
        Locale::En,
        "I'm really sorry you're facing this. Let me fix it immediately.",
    ),
    (
        Emotion::Angry,
        Locale::Hi,
        "माफ़ कीजिए कि आपको समस्या हुई। मैं तुरंत इसका समाधान करता हूँ।",
    ),
    (
        Emotion::Sad,
        Locale::En,
        "I understand this is disappointing. I'm here to help you.",
    ),
    (
        Emotion::Sad,
        Locale::Hi,
        "मैं समझ सकता हूँ कि यह निराशाजनक है। मैं आपकी मदद के लिए यहाँ हूँ।",
    ),
    (
        Emotion::Confused,
        Locale::En,
        "Let me simplify this for you. Here's what you can do...",
    ),
    (
        Emotion::Confused,
        Locale::Hi,
        "चलिए मैं इसे आसान बनाता हूँ। आप ऐसा कर सकते हैं...",
    ),
    (
        Emotion::Happy,
        Locale::En,
        "That's great to hear! Let's keep it going!",
    ),
    (
        Emotion::Happy,
        Locale::Hi,
        "यह सुनकर अच्छा लगा! आइए इसे जारी रखें!",
    ),
];

pub fn lookup(emotion: Emotion, locale: Locale) -> Option<&'static str> {
    RESPONSE_TABLE
        .iter()
        .find(|(e, l, _)| *e == emotion && *l == locale)
        .map(|(_, _, reply)| *reply)
}

/// Table lookup. Total: a missing pair yields [`FALLBACK_REPLY`], never an
/// error.
pub fn resolve_reply(emotion: Emotion, locale: Locale) -> &'static str {
    lookup(emotion, locale).unwrap_or(FALLBACK_REPLY)
}

pub fn resolve(emotion: Emotion, locale: Locale, intent: Intent) -> ResolvedReply {
    ResolvedReply {
        locale,
        emotion,
        intent,
        reply_text: resolve_reply(emotion, locale).to_string(),
    }
}

/// Fixed-structure reply block. User-supplied fields are embedded verbatim;
/// anything rendering this as markup must handle injection itself.
pub fn format_reply(user: &UserContext, resolved: &ResolvedReply) -> String {
    format!(
        "\
**Hi {name}!** 👋
🌐 **Language Selected:** {lang}
❤️ **Emotion Detected:** {emotion}
🧠 **Intent Identified:** {intent}

🤖 **ASK-BOT says:**
{reply}

📩 We will send the details regarding your *{intent_lower}* to your email: **{email}**, for Order ID: **{order_id}**.
",
        name = user.name,
        lang = resolved.locale.display_label(),
        emotion = resolved.emotion.name(),
        intent = resolved.intent.name(),
        reply = resolved.reply_text,
        intent_lower = resolved.intent.lower_name(),
        email = user.email,
        order_id = user.order_id,
    )
}
