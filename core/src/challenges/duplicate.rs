//! First repeated value in a sequence
//!
//! Values seen so far are kept in a plain list and each new value is checked
//! against it with a linear scan, so the search is quadratic in the input
//! length when the repeat sits near the end.

/// The first value seen twice
///
/// `None` for an empty slice, when a negative value is met before any
/// repetition, or when every value is unique.
pub fn find_duplicate(nums: &[i64]) -> Option<i64> {
    let mut seen = Vec::with_capacity(nums.len());
    for &num in nums {
        if num < 0 {
            return None;
        }
        if seen.contains(&num) {
            return Some(num);
        }
        seen.push(num);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_repetition() {
        assert_eq!(find_duplicate(&[1, 3, 4, 2, 2]), Some(2));
        assert_eq!(find_duplicate(&[3, 1, 3, 4, 2]), Some(3));
        assert_eq!(find_duplicate(&[1, 2, 1, 2]), Some(1));
    }

    #[test]
    fn test_repeat_at_the_end() {
        let mut nums: Vec<i64> = (0..500).collect();
        nums.push(499);
        assert_eq!(find_duplicate(&nums), Some(499));
    }

    #[test]
    fn test_no_duplicate() {
        assert_eq!(find_duplicate(&[]), None);
        assert_eq!(find_duplicate(&[1, 2, 3]), None);
        assert_eq!(find_duplicate(&[7]), None);
    }

    #[test]
    fn test_negative_values_are_invalid() {
        assert_eq!(find_duplicate(&[1, -2, 1]), None);
    }
}
