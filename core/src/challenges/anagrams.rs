//! Anagram check over the letters each word uses
//!
//! Both words are reduced to the alphabet letters they contain, in alphabet
//! order. Every letter costs one scan of the word, so the check is linear in
//! the word length with a constant factor of 26. Repeated letters collapse
//! into one and characters outside `a..=z` are dropped.

/// Lower-case both words and compare the letters they use
///
/// Returns both reduced words and whether they match.
pub fn is_anagram(first: &str, second: &str) -> (String, String, bool) {
    let first = used_letters(first);
    let second = used_letters(second);
    let equal = first == second;
    (first, second, equal)
}

fn used_letters(word: &str) -> String {
    let word = word.to_lowercase();
    ('a'..='z').filter(|&letter| word.contains(letter)).collect()
}
