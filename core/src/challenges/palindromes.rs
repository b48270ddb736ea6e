//! Recursive palindrome check

/// Whether `word[low..=high]` reads the same in both directions
///
/// An empty word is not a palindrome.
pub fn is_palindrome_recursive(word: &str, low_index: usize, high_index: usize) -> bool {
    if word.is_empty() {
        return false;
    }
    check(word.as_bytes(), low_index, high_index)
}

fn check(bytes: &[u8], low: usize, high: usize) -> bool {
    if low >= high {
        return true;
    }
    match (bytes.get(low), bytes.get(high)) {
        (Some(l), Some(h)) if l == h => check(bytes, low + 1, high - 1),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(word: &str) -> bool {
        is_palindrome_recursive(word, 0, word.len().saturating_sub(1))
    }

    #[test]
    fn test_palindromes() {
        assert!(full("ANA"));
        assert!(full("SOCOS"));
        assert!(full("REVIVER"));
        assert!(full("abba"));
        assert!(full("a"));
    }

    #[test]
    fn test_not_palindromes() {
        assert!(!full("COXINHA"));
        assert!(!full("AGUA"));
        assert!(!full(""));
    }

    #[test]
    fn test_out_of_range_index() {
        assert!(!is_palindrome_recursive("abc", 0, 10));
    }
}
