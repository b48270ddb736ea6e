//! Sample subjects for profiling
//!
//! Small classic exercises with known growth rates, used to try the profiler
//! end to end.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod anagrams;
pub mod duplicate;
pub mod encrypt;
pub mod palindromes;
pub mod study_schedule;

pub use self::anagrams::is_anagram;
pub use self::duplicate::find_duplicate;
pub use self::encrypt::encrypt_message;
pub use self::palindromes::is_palindrome_recursive;
pub use self::study_schedule::{study_schedule, Period};
