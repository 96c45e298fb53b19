use crate::models::Intent;

/// Priority-ordered rule table. First rule whose keyword set matches wins,
/// so a message containing both "refund" and "cancel" resolves to Refund.
const INTENT_RULES: &[(&[&str], Intent)] = &[
    (&["refund", "money back"], Intent::Refund),
    (&["complaint", "issue", "problem"], Intent::Complaint),
    (&["order", "status", "delivery"], Intent::Order),
    (&["cancel"], Intent::Cancel),
];

/// Case-insensitive substring matching over the ordered rule table.
/// Total: anything that matches no rule is General.
pub fn classify_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();

    for (keywords, intent) in INTENT_RULES {
        if contains_any(&lower, keywords) {
            return *intent;
        }
    }

    Intent::General
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
