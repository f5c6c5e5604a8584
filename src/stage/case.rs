//! Whole-string case mapping and the case predicates built on top of it.
use crate::stage::Stage;
use std::borrow::Cow;

/// Full Unicode lowercase. Zero-copy when the text is already lowercase.
pub struct LowerCase;

/// Full Unicode uppercase. Zero-copy when the text is already uppercase.
pub struct UpperCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !is_lower_case(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if is_lower_case(&text) {
            return text;
        }
        Cow::Owned(text.to_lowercase())
    }
}

impl Stage for UpperCase {
    fn name(&self) -> &'static str {
        "upper_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !is_upper_case(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if is_upper_case(&text) {
            return text;
        }
        Cow::Owned(text.to_uppercase())
    }
}

/// `true` iff lowercasing `text` would leave it unchanged.
///
/// This is transform-then-compare, so digits and punctuation never affect the
/// outcome, and an empty string is trivially lowercase.
#[inline]
pub fn is_lower_case(text: &str) -> bool {
    if text.is_ascii() {
        return !text.bytes().any(|b| b.is_ascii_uppercase());
    }
    // `str::to_lowercase` special-cases final sigma, so compare against it
    // directly instead of mapping char by char.
    text.to_lowercase() == text
}

/// `true` iff uppercasing `text` would leave it unchanged.
#[inline]
pub fn is_upper_case(text: &str) -> bool {
    if text.is_ascii() {
        return !text.bytes().any(|b| b.is_ascii_lowercase());
    }
    text.chars().flat_map(char::to_uppercase).eq(text.chars())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stage_contract::StageTestConfig;

    impl StageTestConfig for LowerCase {
        fn should_pass_through(&self) -> &'static [&'static str] {
            &["already lower", "123 !?", "", "мир"]
        }

        fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
            &[("HELLO World", "hello world"), ("ΌΣΟΣ", "όσος")]
        }
    }

    impl StageTestConfig for UpperCase {
        fn should_pass_through(&self) -> &'static [&'static str] {
            &["LOREM IPSUM", "123 !?", ""]
        }

        fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
            &[("straße", "STRASSE"), ("Hello", "HELLO")]
        }
    }

    #[test]
    fn lower_case_contract() {
        crate::assert_stage_contract!(LowerCase);
    }

    #[test]
    fn upper_case_contract() {
        crate::assert_stage_contract!(UpperCase);
    }

    #[test]
    fn lower_case_predicate() {
        assert!(!is_lower_case("Lorem ipsum dolor sit amet"));
        assert!(is_lower_case("lorem ipsum dolor sit amet"));
        assert!(is_lower_case("123 !?"));
        assert!(is_lower_case(""));
        assert!(is_lower_case("мама мыла раму"));
        assert!(!is_lower_case("Мама"));
    }

    #[test]
    fn upper_case_predicate() {
        assert!(!is_upper_case("LOREM ipsum Dolor sit amet"));
        assert!(is_upper_case("LOREM IPSUM"));
        assert!(is_upper_case("ÉCOLE 42!"));
        // `ß` uppercases to `SS`, so the text is not in its uppercase form.
        assert!(!is_upper_case("STRAßE"));
    }
}
