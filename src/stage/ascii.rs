//! Unicode → ASCII folding via the static transliteration table.
use crate::{stage::Stage, transliteration};
use std::borrow::Cow;

/// Replaces every character found in the transliteration table with its ASCII
/// spelling (`ð` → `d`, `♥` → `love`, `щ` → `shch`).
///
/// Anything the table does not know passes through unchanged, so the output is
/// only guaranteed to be pure ASCII for inputs inside the table's domain.
pub struct Ascii;

impl Stage for Ascii {
    fn name(&self) -> &'static str {
        "ascii"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return memchr::memchr(b'@', text.as_bytes()).is_some();
        }
        text.chars().any(|c| transliteration::lookup(c).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match transliteration::lookup(c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}
