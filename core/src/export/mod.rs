//! Persistence of result records
//!
//! Records are written under a caller-chosen directory as
//! `"<analyzed function> - NNN.<ext>"`, where `NNN` is the run identifier
//! padded to three digits.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod json;

pub use self::json::{ExportError, ExportRecord, JsonExporter};

/// Run identifier zero-padded to three digits
pub fn format_id(id: u32) -> String {
    format!("{:03}", id)
}

/// File name, without extension, of the artifacts of one run
pub fn file_stem(analyzed_function: &str, id: u32) -> String {
    format!("{} - {}", analyzed_function, format_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_padded() {
        assert_eq!(format_id(1), "001");
        assert_eq!(format_id(42), "042");
        assert_eq!(format_id(1234), "1234");
        assert_eq!(file_stem("is_anagram", 7), "is_anagram - 007");
    }
}
