use crate::stage::{Stage, ascii::Ascii};
use std::borrow::Cow;

/// URL-safe slug: ASCII-folded, lowercase, separator-delimited.
///
/// 1. transliterate with [`Ascii`]
/// 2. lowercase
/// 3. every run of whitespace, `_` or separator characters becomes one
///    separator
/// 4. anything else that is not ASCII alphanumeric is dropped, so `-` only
///    delimits words when it is part of the separator
/// 5. no leading or trailing separator
///
/// The result is either empty or matches `^[a-z0-9]+(sep[a-z0-9]+)*$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slug<'s> {
    separator: &'s str,
}

impl Default for Slug<'static> {
    fn default() -> Self {
        Self { separator: "-" }
    }
}

impl<'s> Slug<'s> {
    pub const fn with_separator(separator: &'s str) -> Self {
        Self { separator }
    }

    #[inline(always)]
    fn is_separator(&self, c: char) -> bool {
        c == '_' || c.is_whitespace() || self.separator.contains(c)
    }
}

impl Stage for Slug<'_> {
    fn name(&self) -> &'static str {
        "slug"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        !is_canonical(text, self)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if is_canonical(&text, self) {
            return text;
        }

        let folded = Ascii.apply(Cow::Borrowed(&*text));
        let mut out = String::with_capacity(folded.len());
        let mut pending = false;

        for c in folded.chars().flat_map(char::to_lowercase) {
            if c.is_ascii_alphanumeric() {
                if pending && !out.is_empty() {
                    out.push_str(self.separator);
                }
                pending = false;
                out.push(c);
            } else if self.is_separator(c) {
                pending = true;
            }
        }
        Cow::Owned(out)
    }
}

/// Already a slug: lowercase ASCII alphanumerics joined by single separators.
fn is_canonical(text: &str, slug: &Slug<'_>) -> bool {
    if text.is_empty() {
        return true;
    }
    if slug.separator.is_empty() {
        return text
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
    }
    text.split(slug.separator).all(|word| {
        !word.is_empty()
            && word
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stage_contract::StageTestConfig;

    impl StageTestConfig for Slug<'_> {
        fn should_pass_through(&self) -> &'static [&'static str] {
            &["", "foo-bar-baz", "a1-b2", "single"]
        }

        fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
            &[
                ("FOO bar baz", "foo-bar-baz"),
                ("foo_bar_baz", "foo-bar-baz"),
                ("I ♥ javascript", "i-love-javascript"),
                ("  --Hello,  World!--  ", "hello-world"),
                ("Crème Brûlée à la carte", "creme-brulee-a-la-carte"),
                ("foo---bar", "foo-bar"),
                ("日本語", ""),
                ("!!!", ""),
            ]
        }
    }

    #[test]
    fn slug_contract() {
        crate::assert_stage_contract!(Slug::default());
    }

    #[test]
    fn custom_separator() {
        let slug = Slug::with_separator("_");
        assert_eq!(slug.apply(Cow::Borrowed("foo_bar_baz")), "foo_bar_baz");
        assert_eq!(slug.apply(Cow::Borrowed("Hello World")), "hello_world");
    }

    #[test]
    fn hyphen_is_stripped_unless_it_is_the_separator() {
        let under = Slug::with_separator("_");
        assert_eq!(under.apply(Cow::Borrowed("foo-bar baz")), "foobar_baz");
        let dot = Slug::with_separator(".");
        assert_eq!(dot.apply(Cow::Borrowed("a-b_c d")), "ab.c.d");
        assert_eq!(Slug::default().apply(Cow::Borrowed("a-b_c d")), "a-b-c-d");
    }

    #[test]
    fn multi_char_separator() {
        let slug = Slug::with_separator("--");
        assert_eq!(slug.apply(Cow::Borrowed("a b  c")), "a--b--c");
    }

    #[test]
    fn borrowed_when_already_a_slug() {
        let input = "i-love-javascript";
        let out = Slug::default().apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
