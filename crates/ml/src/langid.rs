use askbot_core::{LanguageIdent, LanguageIdentError};

// Romanized Hindi function words. Short Latin-script Hindi carries no
// script signal, so a couple of these is treated as stronger evidence than
// the Latin letter count.
const ROMAN_HINDI_KW: &[&str] = &[
    "hai", "nahi", "karo", "kya", "kyu", "bhai", "mera", "mujhe", "aap", "tum", "acha", "theek",
    "paisa", "wapas",
];

/// Script-counting language identifier: Devanagari vs Latin, with a
/// romanized-Hindi word list as a tiebreaker for Latin-script text.
#[derive(Debug, Clone, Default)]
pub struct ScriptLanguageIdent;

impl LanguageIdent for ScriptLanguageIdent {
    fn identify(&self, text: &str) -> Result<String, LanguageIdentError> {
        let mut devanagari_count = 0usize;
        let mut latin_count = 0usize;

        for ch in text.chars() {
            let code = ch as u32;
            if (0x0900..=0x097F).contains(&code) {
                devanagari_count += 1;
            } else if ch.is_ascii_alphabetic() {
                latin_count += 1;
            }
        }

        if devanagari_count == 0 && latin_count == 0 {
            return Err(LanguageIdentError::NoSignal);
        }

        if devanagari_count >= latin_count && devanagari_count > 0 {
            return Ok("hi".to_string());
        }

        let lower = text.to_lowercase();
        let hindi_words = ROMAN_HINDI_KW
            .iter()
            .filter(|word| {
                lower
                    .split(|c: char| !c.is_ascii_alphabetic())
                    .any(|token| token == **word)
            })
            .count();

        if hindi_words >= 2 {
            Ok("hi".to_string())
        } else {
            Ok("en".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devanagari_text_is_hindi() {
        let ident = ScriptLanguageIdent;
        assert_eq!(ident.identify("मेरा ऑर्डर कहाँ है").unwrap(), "hi");
    }

    #[test]
    fn english_text_is_english() {
        let ident = ScriptLanguageIdent;
        assert_eq!(ident.identify("where is my order").unwrap(), "en");
    }

    #[test]
    fn romanized_hindi_needs_two_function_words() {
        let ident = ScriptLanguageIdent;
        assert_eq!(ident.identify("order wapas karo bhai").unwrap(), "hi");
        assert_eq!(ident.identify("order status please bhai").unwrap(), "en");
    }

    #[test]
    fn symbol_only_text_has_no_signal() {
        let ident = ScriptLanguageIdent;
        assert_eq!(
            ident.identify("?!? 123"),
            Err(LanguageIdentError::NoSignal)
        );
    }
}
