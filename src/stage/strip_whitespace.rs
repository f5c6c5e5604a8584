use crate::stage::Stage;
use memchr::memchr3;
use std::borrow::Cow;

/// Removes **every** whitespace character, not just leading/trailing ones.
pub struct StripWhitespace;

impl Stage for StripWhitespace {
    fn name(&self) -> &'static str {
        "strip_whitespace"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            let bytes = text.as_bytes();
            // `char::is_whitespace` also covers \r, vertical tab and form feed
            return memchr3(b' ', b'\t', b'\n', bytes).is_some()
                || bytes.iter().any(|&b| matches!(b, b'\r' | 0x0B | 0x0C));
        }
        text.chars().any(char::is_whitespace)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.chars().filter(|c| !c.is_whitespace()).collect())
    }
}
