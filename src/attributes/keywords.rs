//! Keyword frequency analysis.
//!
//! Visible body text is tokenized into lowercase terms. Stop words and terms
//! outside the configured length bounds are dropped and the rest are counted.
//! Terms keep the order of their first occurrence; ranking is left to callers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dom::{self, Document};
use crate::patterns::KEYWORD_TOKEN;

/// A term and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword {
    /// Lowercase term.
    pub term: String,
    /// Occurrences, at least 1.
    pub frequency: usize,
}

impl Keyword {
    /// Build a keyword pair.
    #[must_use]
    pub fn new(term: impl Into<String>, frequency: usize) -> Self {
        Self {
            term: term.into(),
            frequency,
        }
    }
}

/// Common English words that carry no topical weight.
pub static STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "also", "although",
    "always", "am", "among", "an", "and", "another", "any", "anyone", "anything", "are",
    "aren't", "around", "as", "at", "back", "be", "became", "because", "become", "been",
    "before", "being", "below", "best", "better", "between", "both", "but", "by", "came",
    "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "either", "else", "enough", "etc", "even",
    "ever", "every", "few", "first", "for", "from", "further", "get", "gets", "getting",
    "give", "given", "go", "goes", "going", "gone", "got", "had", "hadn't", "has",
    "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "however", "i",
    "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it",
    "it's", "its", "itself", "just", "know", "last", "least", "less", "let", "let's",
    "like", "likely", "made", "make", "makes", "many", "may", "maybe", "me", "might",
    "mine", "more", "most", "much", "must", "mustn't", "my", "myself", "need", "needs",
    "never", "new", "next", "no", "nor", "not", "now", "of", "off", "often",
    "on", "once", "one", "only", "or", "other", "others", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "per", "perhaps", "please", "put", "quite", "rather",
    "really", "said", "same", "say", "says", "see", "seen", "several", "shall", "shan't",
    "she", "she'd", "she'll", "she's", "should", "shouldn't", "since", "so", "some", "something",
    "still", "such", "take", "than", "that", "that's", "the", "their", "theirs", "them",
    "themselves", "then", "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've",
    "thing", "things", "think", "this", "those", "though", "through", "thus", "to", "too",
    "took", "two", "under", "until", "up", "upon", "us", "use", "used", "using",
    "very", "via", "was", "wasn't", "way", "we", "we'd", "we'll", "we're", "we've",
    "well", "went", "were", "weren't", "what", "what's", "when", "when's", "where", "where's",
    "whether", "which", "while", "who", "who's", "whom", "whose", "why", "why's", "will",
    "with", "within", "without", "won't", "would", "wouldn't", "yes", "yet", "you", "you'd",
    "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// Whether `term` (lowercase) is a stop word.
#[must_use]
pub fn is_stop_word(term: &str) -> bool {
    STOP_WORDS.contains(&term)
}

/// Split text into normalized terms.
///
/// Terms are lowercased, typographic apostrophes are folded to `'`, and
/// leading apostrophes and trailing `. - '` are trimmed. Purely numeric
/// tokens are discarded.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    KEYWORD_TOKEN.find_iter(text).filter_map(|m| {
        let term = m.as_str().to_lowercase().replace('’', "'");
        let term = term
            .trim_start_matches('\'')
            .trim_end_matches(['.', '-', '\'']);

        if term.chars().any(char::is_alphabetic) {
            Some(term.to_string())
        } else {
            None
        }
    })
}

/// Count keyword frequencies in `text`.
///
/// Stop words and terms shorter than `min_length` characters are ignored.
/// `max_length`, when set, also drops longer terms.
#[must_use]
pub fn analyze(text: &str, min_length: usize, max_length: Option<usize>) -> Vec<Keyword> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut keywords: Vec<Keyword> = Vec::new();

    for term in tokenize(text) {
        let len = term.chars().count();
        if len < min_length || max_length.is_some_and(|max| len > max) || is_stop_word(&term) {
            continue;
        }

        if let Some(&slot) = index.get(&term) {
            keywords[slot].frequency += 1;
        } else {
            index.insert(term.clone(), keywords.len());
            keywords.push(Keyword::new(term, 1));
        }
    }

    keywords
}

/// Count keywords in the visible body text of a document.
#[must_use]
pub fn document_keywords(doc: &Document, min_length: usize, max_length: Option<usize>) -> Vec<Keyword> {
    let text = dom::select_first(doc, "body")
        .map(|body| dom::visible_text(&body))
        .unwrap_or_default();
    analyze(&text, min_length, max_length)
}
