use crate::stage::{Stage, limit::ELLIPSIS};
use std::borrow::Cow;

/// Keeps the first `max` whitespace-separated words.
///
/// When the text has more words than that, the kept words are joined with a
/// single space and the suffix is appended directly (no space before it).
/// Punctuation attached to the last kept word stays, so
/// `"sit amet, consectetur"` cut after two words ends in `"amet,…"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Words<'s> {
    max: usize,
    suffix: &'s str,
}

impl Words<'static> {
    pub const fn new(max: usize) -> Self {
        Self {
            max,
            suffix: ELLIPSIS,
        }
    }
}

impl<'s> Words<'s> {
    pub const fn suffix<'t>(self, suffix: &'t str) -> Words<'t> {
        Words {
            max: self.max,
            suffix,
        }
    }

    #[inline]
    pub const fn max(&self) -> usize {
        self.max
    }
}

impl Stage for Words<'_> {
    fn name(&self) -> &'static str {
        "words"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.split_whitespace().nth(self.max).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        for (i, word) in text.split_whitespace().take(self.max).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(word);
        }
        out.push_str(self.suffix);
        Cow::Owned(out)
    }
}
