//! Rule-based annotation engine.
//!
//! A deterministic, dependency-light stand-in for a full statistical
//! tagger: Unicode-aware tokenization, closed-class lexicon lookup plus
//! suffix heuristics for POS tagging, and a suffix-stripping lemmatizer.
//! The built-in stopword flag comes from the `stop-words` crate's lists.
//!
//! Tagging and lemmatization are heuristic by design. The pipeline's
//! contracts (casing, filtering, ordering) hold for any engine; callers
//! needing higher tagging accuracy can inject their own
//! [`AnnotationEngine`](super::AnnotationEngine) implementation.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::annotate::AnnotationEngine;
use crate::error::AnnotateError;
use crate::types::{Language, PosTag, Token};

// ─── Closed-class lexicons ──────────────────────────────────────────────────

const EN_DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "some", "any", "each", "every", "no",
    "either", "neither", "both", "all",
];

const EN_PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "over", "under",
    "about", "against", "between", "through", "during", "before", "after", "above", "below",
    "without", "within", "among", "across", "behind", "beyond", "near", "toward", "towards",
    "upon", "via",
];

const EN_PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "who", "whom",
    "whose", "which", "what", "myself", "yourself", "himself", "herself", "itself", "ourselves",
    "themselves", "something", "anything", "nothing", "everything", "someone", "anyone",
    "everyone",
];

const EN_CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although", "though",
    "unless", "since", "whereas", "whether", "than", "as", "when", "where",
];

const EN_AUX_VERBS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ought",
];

const EN_ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "just", "only", "then", "there", "here", "now", "often",
    "always", "never", "again", "already", "still", "however", "thus", "rather", "quite",
];

const ES_DETERMINERS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "este", "esta", "estos", "estas",
    "ese", "esa", "esos", "esas", "cada", "todo", "toda", "todos", "todas", "ningun", "ninguna",
];

const ES_PREPOSITIONS: &[&str] = &[
    "de", "en", "a", "por", "para", "con", "sin", "sobre", "entre", "hasta", "hacia", "desde",
    "durante", "contra", "tras", "segun", "ante", "bajo", "mediante",
];

const ES_PRONOUNS: &[&str] = &[
    "yo", "tu", "usted", "nosotros", "vosotros", "ustedes", "ellos", "ellas", "ella", "me",
    "te", "se", "nos", "os", "lo", "le", "les", "mi", "su", "sus", "mis", "tus", "nuestro",
    "nuestra", "que", "quien", "cual", "algo", "nada", "alguien", "nadie",
];

const ES_CONJUNCTIONS: &[&str] = &[
    "y", "e", "o", "u", "pero", "sino", "porque", "aunque", "si", "mientras", "cuando", "donde",
    "como", "pues", "ni",
];

const ES_AUX_VERBS: &[&str] = &[
    "es", "son", "era", "eran", "fue", "fueron", "ser", "sera", "seran", "estar", "esta",
    "estan", "estaba", "estaban", "ha", "han", "habia", "haber", "hay", "puede", "pueden",
    "debe", "deben", "tiene", "tienen",
];

const ES_ADVERBS: &[&str] = &[
    "no", "muy", "tambien", "solo", "ya", "ahora", "siempre", "nunca", "aqui", "alli", "asi",
    "entonces", "ademas", "aun", "todavia", "bien", "mal",
];

// ─── Suffix heuristics ──────────────────────────────────────────────────────

const EN_ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "ic", "ical", "al", "able", "ible", "ant", "ent", "less", "ish", "ar",
];

const ES_ADJ_SUFFIXES: &[&str] = &[
    "oso", "osa", "ivo", "iva", "ble", "ico", "ica", "al", "ante", "iente",
];

const ES_VERB_SUFFIXES: &[&str] = &["ando", "iendo", "aba", "aban", "aron", "ieron"];

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Deterministic rule-based [`AnnotationEngine`] for English and Spanish.
///
/// All internal state is built once at construction and never mutated,
/// so a single instance can be shared across rayon workers.
#[derive(Debug, Clone)]
pub struct RuleAnnotator {
    language: Language,
    builtin_stopwords: FxHashSet<String>,
}

impl RuleAnnotator {
    /// Create an annotator for `language`, loading the built-in stopword
    /// lexicon for that language.
    pub fn new(language: Language) -> Self {
        let lang = match language {
            Language::English => LANGUAGE::English,
            Language::Spanish => LANGUAGE::Spanish,
        };
        let builtin_stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self {
            language,
            builtin_stopwords,
        }
    }

    /// The language this annotator was built for.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether the built-in lexicon flags `word` as a stopword.
    pub fn is_builtin_stopword(&self, word: &str) -> bool {
        self.builtin_stopwords.contains(&word.to_lowercase())
    }

    // ─── Tokenization ───────────────────────────────────────────────────────

    /// Split text into alphanumeric runs and single punctuation marks.
    fn segment(text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch.is_alphanumeric() {
                current.push(ch);
            } else {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                if !ch.is_whitespace() {
                    tokens.push(ch.to_string());
                }
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }

    // ─── POS tagging ────────────────────────────────────────────────────────

    fn lookup_closed_class(&self, lower: &str) -> Option<PosTag> {
        let (dets, preps, prons, conjs, aux, advs) = match self.language {
            Language::English => (
                EN_DETERMINERS,
                EN_PREPOSITIONS,
                EN_PRONOUNS,
                EN_CONJUNCTIONS,
                EN_AUX_VERBS,
                EN_ADVERBS,
            ),
            Language::Spanish => (
                ES_DETERMINERS,
                ES_PREPOSITIONS,
                ES_PRONOUNS,
                ES_CONJUNCTIONS,
                ES_AUX_VERBS,
                ES_ADVERBS,
            ),
        };
        if dets.contains(&lower) {
            Some(PosTag::Determiner)
        } else if preps.contains(&lower) {
            Some(PosTag::Preposition)
        } else if prons.contains(&lower) {
            Some(PosTag::Pronoun)
        } else if conjs.contains(&lower) {
            Some(PosTag::Conjunction)
        } else if aux.contains(&lower) {
            Some(PosTag::Verb)
        } else if advs.contains(&lower) {
            Some(PosTag::Adverb)
        } else {
            None
        }
    }

    fn tag(&self, surface: &str, sentence_start: bool) -> PosTag {
        if surface.chars().all(|c| !c.is_alphanumeric()) {
            return PosTag::Punctuation;
        }
        if surface.chars().all(|c| c.is_numeric()) {
            return PosTag::Number;
        }

        let lower = surface.to_lowercase();
        if let Some(tag) = self.lookup_closed_class(&lower) {
            return tag;
        }

        // Mid-sentence capitalization marks a proper noun.
        let capitalized = surface.chars().next().is_some_and(|c| c.is_uppercase());
        if capitalized && !sentence_start {
            return PosTag::ProperNoun;
        }

        match self.language {
            Language::English => {
                if lower.ends_with("ly") {
                    PosTag::Adverb
                } else if lower.ends_with("ing") || lower.ends_with("ed") {
                    PosTag::Verb
                } else if EN_ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
                    PosTag::Adjective
                } else {
                    PosTag::Noun
                }
            }
            Language::Spanish => {
                if lower.ends_with("mente") {
                    PosTag::Adverb
                } else if ES_VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
                    PosTag::Verb
                } else if ES_ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
                    PosTag::Adjective
                } else {
                    PosTag::Noun
                }
            }
        }
    }

    // ─── Lemmatization ──────────────────────────────────────────────────────

    fn lemmatize(&self, surface: &str, pos: PosTag) -> String {
        let lower = surface.to_lowercase();
        match self.language {
            Language::English => Self::lemmatize_en(&lower, pos),
            Language::Spanish => Self::lemmatize_es(&lower, pos),
        }
    }

    fn lemmatize_en(lower: &str, pos: PosTag) -> String {
        if let Some(irregular) = Self::en_irregular(lower) {
            return irregular.to_string();
        }
        match pos {
            PosTag::Verb => {
                if let Some(stem) = lower.strip_suffix("ing") {
                    return Self::undouble(stem, lower);
                }
                if let Some(stem) = lower.strip_suffix("ed") {
                    // "used" -> "use": put the final `e` back before giving up.
                    if stem.len() < 3 {
                        let with_e = format!("{stem}e");
                        if with_e.len() >= 3 {
                            return with_e;
                        }
                        return lower.to_string();
                    }
                    return Self::undouble(stem, lower);
                }
                if let Some(stem) = lower.strip_suffix('s') {
                    if stem.len() >= 3 && !stem.ends_with('s') {
                        return stem.to_string();
                    }
                }
                lower.to_string()
            }
            PosTag::Noun | PosTag::ProperNoun => {
                if let Some(stem) = lower.strip_suffix("ies") {
                    if !stem.is_empty() {
                        return format!("{stem}y");
                    }
                }
                if ["ches", "shes", "sses", "xes", "zes"].iter().any(|s| lower.ends_with(s)) {
                    if let Some(stem) = lower.strip_suffix("es") {
                        return stem.to_string();
                    }
                }
                if let Some(stem) = lower.strip_suffix('s') {
                    if stem.len() >= 3 && !stem.ends_with('s') && !stem.ends_with('u') && !stem.ends_with('i') {
                        return stem.to_string();
                    }
                }
                lower.to_string()
            }
            _ => lower.to_string(),
        }
    }

    /// Drop a doubled final consonant left over from suffix stripping
    /// ("running" -> "runn" -> "run"). Falls back to the original word
    /// when the stem is implausibly short.
    fn undouble(stem: &str, original: &str) -> String {
        if stem.len() < 3 {
            return original.to_string();
        }
        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();
        if n >= 2 && chars[n - 1] == chars[n - 2] && !"aeiou".contains(chars[n - 1]) {
            return chars[..n - 1].iter().collect();
        }
        stem.to_string()
    }

    fn en_irregular(lower: &str) -> Option<&'static str> {
        Some(match lower {
            "is" | "am" | "are" | "was" | "were" | "been" | "being" => "be",
            "has" | "had" | "having" => "have",
            "does" | "did" | "done" => "do",
            "went" | "gone" | "goes" => "go",
            "said" | "says" => "say",
            "made" => "make",
            "took" | "taken" => "take",
            "gave" | "given" => "give",
            "found" => "find",
            "children" => "child",
            "men" => "man",
            "women" => "woman",
            "feet" => "foot",
            "teeth" => "tooth",
            _ => return None,
        })
    }

    fn lemmatize_es(lower: &str, pos: PosTag) -> String {
        if !matches!(pos, PosTag::Noun | PosTag::ProperNoun | PosTag::Adjective) {
            return lower.to_string();
        }
        // Plural stripping: vowel + "s" ("casas" -> "casa"),
        // consonant + "es" ("ciudades" -> "ciudad").
        if let Some(stem) = lower.strip_suffix("es") {
            if stem.len() >= 3 && stem.chars().last().is_some_and(|c| !"aeiou".contains(c)) {
                return stem.to_string();
            }
        }
        if let Some(stem) = lower.strip_suffix('s') {
            if stem.len() >= 3 && stem.chars().last().is_some_and(|c| "aeiou".contains(c)) {
                return stem.to_string();
            }
        }
        lower.to_string()
    }
}

impl AnnotationEngine for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotateError> {
        let mut tokens = Vec::new();
        let mut sentence_start = true;

        for surface in Self::segment(text) {
            let pos = self.tag(&surface, sentence_start);
            let is_alpha = !surface.is_empty() && surface.chars().all(|c| c.is_alphabetic());
            let lemma = if pos == PosTag::Punctuation {
                surface.clone()
            } else {
                self.lemmatize(&surface, pos)
            };
            let is_stop = self.builtin_stopwords.contains(&surface.to_lowercase());

            sentence_start =
                pos == PosTag::Punctuation && matches!(surface.as_str(), "." | "!" | "?" | ";");

            tokens.push(Token {
                text: surface,
                lemma,
                pos,
                is_alpha,
                is_stop,
            });
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotate(text: &str) -> Vec<Token> {
        RuleAnnotator::new(Language::English).annotate(text).unwrap()
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(annotate("").is_empty());
        assert!(annotate("   \t\n ").is_empty());
    }

    #[test]
    fn test_tokenization_splits_punctuation() {
        let tokens = annotate("The patient had an MRI scan.");
        let surfaces: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            surfaces,
            vec!["The", "patient", "had", "an", "MRI", "scan", "."]
        );
    }

    #[test]
    fn test_closed_class_tagging() {
        let tokens = annotate("The patient had an scan");
        assert_eq!(tokens[0].pos, PosTag::Determiner); // The
        assert_eq!(tokens[2].pos, PosTag::Verb); // had (aux)
        assert_eq!(tokens[3].pos, PosTag::Determiner); // an
    }

    #[test]
    fn test_builtin_stopword_flag() {
        let tokens = annotate("the patient");
        assert!(tokens[0].is_stop);
        assert!(!tokens[1].is_stop);
    }

    #[test]
    fn test_proper_noun_mid_sentence() {
        let tokens = annotate("We visited Boston yesterday");
        let boston = tokens.iter().find(|t| t.text == "Boston").unwrap();
        assert_eq!(boston.pos, PosTag::ProperNoun);
    }

    #[test]
    fn test_sentence_initial_capital_is_not_proper_noun() {
        let tokens = annotate("Patients recovered. Boston hosted them.");
        let patients = tokens.iter().find(|t| t.text == "Patients").unwrap();
        assert_eq!(patients.pos, PosTag::Noun);
        // "Boston" follows a period, so it is sentence-initial too.
        let boston = tokens.iter().find(|t| t.text == "Boston").unwrap();
        assert_eq!(boston.pos, PosTag::Noun);
    }

    #[test]
    fn test_is_alpha_flag() {
        let tokens = annotate("CO2 levels rose 5 percent");
        let co2 = tokens.iter().find(|t| t.text == "CO2").unwrap();
        assert!(!co2.is_alpha);
        let levels = tokens.iter().find(|t| t.text == "levels").unwrap();
        assert!(levels.is_alpha);
        let five = tokens.iter().find(|t| t.text == "5").unwrap();
        assert!(!five.is_alpha);
        assert_eq!(five.pos, PosTag::Number);
    }

    #[test]
    fn test_noun_plural_lemmas() {
        let tokens = annotate("patients studies boxes branches");
        let lemmas: Vec<_> = tokens.iter().map(|t| t.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["patient", "study", "box", "branch"]);
    }

    #[test]
    fn test_verb_lemmas() {
        let annotator = RuleAnnotator::new(Language::English);
        assert_eq!(annotator.lemmatize("running", PosTag::Verb), "run");
        assert_eq!(annotator.lemmatize("walked", PosTag::Verb), "walk");
        assert_eq!(annotator.lemmatize("scanned", PosTag::Verb), "scan");
        assert_eq!(annotator.lemmatize("was", PosTag::Verb), "be");
        assert_eq!(annotator.lemmatize("had", PosTag::Verb), "have");
    }

    #[test]
    fn test_adjective_suffix_tagging() {
        let tokens = annotate("a magnetic device");
        let magnetic = tokens.iter().find(|t| t.text == "magnetic").unwrap();
        assert_eq!(magnetic.pos, PosTag::Adjective);
        assert_eq!(magnetic.lemma, "magnetic");
    }

    #[test]
    fn test_spanish_annotator() {
        let annotator = RuleAnnotator::new(Language::Spanish);
        let tokens = annotator.annotate("las casas blancas").unwrap();
        assert_eq!(tokens[0].pos, PosTag::Determiner);
        assert!(tokens[0].is_stop);
        assert_eq!(tokens[1].lemma, "casa");
    }

    #[test]
    fn test_deterministic() {
        let a = annotate("The patient had an MRI scan.");
        let b = annotate("The patient had an MRI scan.");
        assert_eq!(a, b);
    }
}
