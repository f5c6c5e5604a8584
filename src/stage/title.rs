use crate::stage::{Stage, push_lower, push_upper};
use std::borrow::Cow;

/// Title-cases every whitespace-delimited word: first character upper, the
/// rest lower. Whitespace runs are kept exactly as they were, and punctuation
/// glued to a word (`baz!`) rides along untouched.
pub struct Title;

impl Stage for Title {
    fn name(&self) -> &'static str {
        "title"
    }

    fn needs_apply(&self, text: &str) -> bool {
        let mut at_word_start = true;
        for c in text.chars() {
            if c.is_whitespace() {
                at_word_start = true;
                continue;
            }
            let unchanged = if at_word_start {
                c.to_uppercase().eq(std::iter::once(c))
            } else {
                c.to_lowercase().eq(std::iter::once(c))
            };
            if !unchanged {
                return true;
            }
            at_word_start = false;
        }
        false
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        let mut at_word_start = true;
        for c in text.chars() {
            if c.is_whitespace() {
                out.push(c);
                at_word_start = true;
            } else if at_word_start {
                push_upper(&mut out, c);
                at_word_start = false;
            } else {
                push_lower(&mut out, c);
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stage_contract::StageTestConfig;

    impl StageTestConfig for Title {
        fn should_pass_through(&self) -> &'static [&'static str] {
            &["Foo Bar Baz!", "", "  Spaced   Out  ", "42 Is The Answer"]
        }

        fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
            &[
                ("foo bar baz!", "Foo Bar Baz!"),
                ("lorem ipsum DoloR sit ameT", "Lorem Ipsum Dolor Sit Amet"),
                ("мама\tмыла  раму", "Мама\tМыла  Раму"),
            ]
        }
    }

    #[test]
    fn title_contract() {
        crate::assert_stage_contract!(Title);
    }
}
