//! The fixed stop-word table.
//!
//! Words that convey little meaning on their own and are removed from input
//! before the vocabulary scan. The table is compiled in and compared
//! case-insensitively.
//!
//! The game vocabulary claims `I`, `AGAIN`, and `ALL`; they are not stop
//! words here.

/// English stop words, lower-case.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "am", "an", "and", "any", "are", "as", "at", "be", "because",
    "been", "before", "being", "below", "between", "both", "but", "by", "can", "did", "do", "does",
    "doing", "don", "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "if",
    "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my", "myself", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "s", "same", "she", "should", "so", "some", "such", "t",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Whether a token (any case) is a stop word.
#[must_use]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS
        .iter()
        .any(|stop| token.eq_ignore_ascii_case(stop))
}
