use crate::stage::{Stage, push_lower, push_upper};
use std::borrow::Cow;

/// Uppercases the first character and leaves the remainder untouched.
///
/// Case mapping is Unicode-aware and applies to the first scalar value, so
/// `мама` → `Мама` and `ßa` → `SSa`.
pub struct UcFirst;

/// Lowercases the first character and leaves the remainder untouched.
pub struct LcFirst;

impl Stage for UcFirst {
    fn name(&self) -> &'static str {
        "ucfirst"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars()
            .next()
            .is_some_and(|c| c.to_uppercase().ne(std::iter::once(c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        map_first(text, push_upper)
    }
}

impl Stage for LcFirst {
    fn name(&self) -> &'static str {
        "lcfirst"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars()
            .next()
            .is_some_and(|c| c.to_lowercase().ne(std::iter::once(c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        map_first(text, push_lower)
    }
}

fn map_first<'a>(text: Cow<'a, str>, push: fn(&mut String, char)) -> Cow<'a, str> {
    let Some(first) = text.chars().next() else {
        return text;
    };
    let mut head = String::with_capacity(4);
    push(&mut head, first);
    if head.chars().eq(std::iter::once(first)) {
        return text; // zero-copy
    }

    let rest = &text[first.len_utf8()..];
    let mut out = String::with_capacity(head.len() + rest.len());
    out.push_str(&head);
    out.push_str(rest);
    Cow::Owned(out)
}
