use crate::stage::{Stage, char_to_byte};
use std::borrow::Cow;

/// Suffix appended by [`Limit`] and [`Words`](crate::stage::words::Words) when
/// they cut text short.
pub const ELLIPSIS: &str = "…";

/// Hard cut at `max` characters, then append a suffix.
///
/// No word-boundary awareness: `Lorem ipsum` limited to 7 is `Lorem i…`.
/// Text of at most `max` characters is returned untouched (no suffix).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit<'s> {
    max: usize,
    suffix: &'s str,
}

impl Limit<'static> {
    pub const fn new(max: usize) -> Self {
        Self {
            max,
            suffix: ELLIPSIS,
        }
    }
}

impl<'s> Limit<'s> {
    /// Replace the default `…` suffix.
    pub const fn suffix<'t>(self, suffix: &'t str) -> Limit<'t> {
        Limit {
            max: self.max,
            suffix,
        }
    }

    #[inline]
    pub const fn max(&self) -> usize {
        self.max
    }
}

impl Stage for Limit<'_> {
    fn name(&self) -> &'static str {
        "limit"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        // Byte length is an upper bound on char count.
        text.len() > self.max && text.chars().nth(self.max).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        // `needs_apply` guarantees a char exists at `max`.
        let cut = char_to_byte(&text, self.max).unwrap_or(text.len());
        let mut out = String::with_capacity(cut + self.suffix.len());
        out.push_str(&text[..cut]);
        out.push_str(self.suffix);
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stage_contract::StageTestConfig;

    impl StageTestConfig for Limit<'_> {
        fn should_pass_through(&self) -> &'static [&'static str] {
            &["", "short", "exactly twenty chars", "мама мыла раму"]
        }

        fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
            &[
                ("Lorem ipsum dolor sit amet", "Lorem ipsum dolor si…"),
                ("мама мыла раму мама мыла раму", "мама мыла раму мама …"),
            ]
        }
    }

    #[test]
    fn limit_contract() {
        crate::assert_stage_contract!(Limit::new(20));
    }

    #[test]
    fn custom_suffix() {
        let out = Limit::new(10)
            .suffix("***")
            .apply(Cow::Borrowed("Lorem ipsum dolor sit amet"));
        assert_eq!(out, "Lorem ipsu***");
    }

    #[test]
    fn no_suffix_when_it_fits() {
        let input = "Lorem ipsum dolor sit amet";
        let out = Limit::new(100).apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, input);
    }

    #[test]
    fn zero_limit_keeps_only_suffix() {
        assert_eq!(Limit::new(0).apply(Cow::Borrowed("abc")), "…");
        assert_eq!(Limit::new(0).apply(Cow::Borrowed("")), "");
    }

    #[test]
    fn never_splits_a_code_point() {
        let out = Limit::new(2).suffix("").apply(Cow::Borrowed("日本語"));
        assert_eq!(out, "日本");
    }
}
