//! Case predicates for conversion and inference
//!
//! All predicates compare full upper/lower foldings rather than single
//! scalar flags so that multi-char foldings behave consistently.

/// A string is case-bearing when upper- and lowercasing disagree.
pub(crate) fn has_case(s: &str) -> bool {
    s.to_uppercase() != s.to_lowercase()
}

pub(crate) fn eq_uppercase(s: &str) -> bool {
    s == s.to_uppercase()
}

pub(crate) fn eq_lowercase(s: &str) -> bool {
    s == s.to_lowercase()
}

pub(crate) fn char_eq_uppercase(c: char) -> bool {
    eq_uppercase(&c.to_string())
}

/// First char uppercased, the rest lowercased.
pub(crate) fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result: String = first.to_uppercase().collect();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_case() {
        assert!(has_case("a"));
        assert!(has_case("Щ"));
        assert!(!has_case("'"));
        assert!(!has_case("3"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("щука"), "Щука");
        assert_eq!(title_case("SCH"), "Sch");
        assert_eq!(title_case(""), "");
    }
}
