// File: src/dictionary/morphy.rs
use crate::core::types::Pos;

/// WordNet's English detachment rules: (inflected suffix, base suffix).
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(pos: Pos) -> &'static [(&'static str, &'static str)] {
    match pos {
        Pos::Noun => NOUN_RULES,
        Pos::Verb => VERB_RULES,
        Pos::Adjective => ADJECTIVE_RULES,
        Pos::Adverb => &[],
    }
}

/// Candidate citation forms for an English word, the word itself first.
/// Candidates are not checked against any lexicon; callers filter them.
pub fn candidate_forms(word: &str, pos: Pos) -> Vec<String> {
    let mut forms = vec![word.to_string()];
    for (suffix, replacement) in rules(pos) {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.is_empty() {
                continue;
            }
            let form = format!("{}{}", stem, replacement);
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
    }
    forms
}
