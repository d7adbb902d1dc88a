use regex::Regex;
use std::collections::HashSet;

pub const MIN_SENTENCE_CHARS: usize = 20;
pub const MIN_TERM_CHARS: usize = 4;
pub const MAX_KEY_TERMS: usize = 10;

lazy_static::lazy_static! {
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+").expect("valid sentence regex");
    static ref KEY_TERM: Regex =
        Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b|\b\w{5,}\b").expect("valid term regex");
}

/// Sentences and key terms pulled from a block of pasted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concepts {
    pub sentences: Vec<String>,
    pub key_terms: Vec<String>,
}

impl Concepts {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty() && self.key_terms.is_empty()
    }
}

pub fn extract_concepts(text: &str) -> Concepts {
    if text.trim().is_empty() {
        return Concepts::default();
    }

    Concepts {
        sentences: extract_sentences(text),
        key_terms: extract_key_terms(text),
    }
}

/// Split on runs of terminal punctuation and keep the pieces long enough to
/// carry a statement.
pub fn extract_sentences(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(String::from)
        .collect()
}

/// Capitalized phrases and long words, deduplicated in order of first
/// appearance.
pub fn extract_key_terms(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    KEY_TERM
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|term| term.chars().count() > MIN_TERM_CHARS)
        .filter(|term| seen.insert(*term))
        .take(MAX_KEY_TERMS)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHOTOSYNTHESIS: &str = "Photosynthesis converts light energy into chemical energy. \
        Plants absorb carbon dioxide through small pores!! \
        Chlorophyll gives leaves their color? Short one. \
        The Calvin Cycle happens in the stroma.";

    #[test]
    fn test_empty_text() {
        let concepts = extract_concepts("");
        assert!(concepts.sentences.is_empty());
        assert!(concepts.key_terms.is_empty());
        assert!(concepts.is_empty());
    }

    #[test]
    fn test_short_text_has_no_sentences() {
        let concepts = extract_concepts("A short bit.");
        assert!(concepts.sentences.is_empty());
        assert_eq!(concepts.key_terms, vec!["short"]);
        assert!(!concepts.is_empty());
    }

    #[test]
    fn test_short_text_still_yields_terms() {
        let concepts = extract_concepts("Quantum tunneling.");
        assert!(concepts.sentences.is_empty());
        assert_eq!(concepts.key_terms, vec!["Quantum", "tunneling"]);
    }

    #[test]
    fn test_sentences_keep_order_and_drop_short_ones() {
        let sentences = extract_sentences(PHOTOSYNTHESIS);
        assert_eq!(
            sentences,
            vec![
                "Photosynthesis converts light energy into chemical energy",
                "Plants absorb carbon dioxide through small pores",
                "Chlorophyll gives leaves their color",
                "The Calvin Cycle happens in the stroma",
            ]
        );
    }

    #[test]
    fn test_sentence_length_boundary() {
        // 20 characters is dropped, 21 is kept.
        let twenty = "abcdefghij abcdefghi";
        let twenty_one = "abcdefghij abcdefghij";
        assert_eq!(twenty.len(), 20);
        assert_eq!(twenty_one.len(), 21);

        let text = format!("{}. {}.", twenty, twenty_one);
        assert_eq!(extract_sentences(&text), vec![twenty_one]);
    }

    #[test]
    fn test_capitalized_phrases_are_single_terms() {
        let terms = extract_key_terms("We studied the Calvin Cycle and the Krebs Cycle today.");
        assert!(terms.contains(&"Calvin Cycle".to_string()));
        assert!(terms.contains(&"Krebs Cycle".to_string()));
        assert!(terms.contains(&"studied".to_string()));
        assert!(terms.contains(&"today".to_string()));
        assert!(!terms.contains(&"We".to_string()));
    }

    #[test]
    fn test_terms_are_unique_and_bounded() {
        let text = "alpha1 alpha1 bravo2 charlie delta4 echo55 foxtrot golf77 hotel8 \
                    india9 juliet kilo00 lima11 mike22";
        let terms = extract_key_terms(text);
        assert_eq!(terms.len(), MAX_KEY_TERMS);

        let unique: HashSet<&String> = terms.iter().collect();
        assert_eq!(unique.len(), terms.len());
        assert_eq!(terms[0], "alpha1");
        assert!(terms.iter().all(|t| t.chars().count() > MIN_TERM_CHARS));
    }

    #[test]
    fn test_short_capitalized_words_are_filtered() {
        let terms = extract_key_terms("Rust and Go are fun.");
        assert!(terms.is_empty());
    }
}
