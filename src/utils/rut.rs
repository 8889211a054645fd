//! Chilean RUT helpers (format only; the backend owns the check digit).

use regex::Regex;
use std::sync::OnceLock;

fn rut_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\d{1,8}-?[\dkK]$").expect("static RUT pattern")
    })
}

/// Strip dots and spaces: "12.345.678-5" → "12345678-5".
pub fn normalize(rut: &str) -> String {
    rut.chars().filter(|c| *c != '.' && !c.is_whitespace()).collect()
}

pub fn is_valid_format(rut: &str) -> bool {
    rut_pattern().is_match(&normalize(rut))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_spellings() {
        assert!(is_valid_format("12345678-5"));
        assert!(is_valid_format("12.345.678-K"));
        assert!(is_valid_format("7654321k"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(!is_valid_format(""));
        assert!(!is_valid_format("abc-1"));
        assert!(!is_valid_format("123456789-0"));
    }
}
