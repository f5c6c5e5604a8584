//! `snake_case` and `kebab-case` conversion.
use crate::stage::{Stage, is_boundary, push_lower};
use std::borrow::Cow;

/// Inserts a delimiter (default `_`) in front of every uppercase letter that
/// follows a lowercase letter or a digit, then lowercases everything.
///
/// Existing boundary runs (`_`, `-`, whitespace) collapse into a single
/// delimiter; leading and trailing boundaries are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake<'d> {
    delimiter: &'d str,
}

impl Default for Snake<'static> {
    fn default() -> Self {
        Self { delimiter: "_" }
    }
}

impl<'d> Snake<'d> {
    pub const fn with_delimiter(delimiter: &'d str) -> Self {
        Self { delimiter }
    }
}

/// `kebab-case`: trims, then starts a new `-` segment at **every** capital that
/// is not already at a word start. Acronym runs are not kept together, so
/// `chuckHerInTheUTE` becomes `chuck-her-in-the-u-t-e`.
pub struct Kebab;

impl Stage for Snake<'_> {
    fn name(&self) -> &'static str {
        "snake"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        may_delimit(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !may_delimit(&text) {
            return text;
        }
        let out = delimit(&text, self.delimiter, |prev| {
            prev.is_lowercase() || prev.is_numeric()
        });
        if out == *text {
            return text;
        }
        Cow::Owned(out)
    }
}

impl Stage for Kebab {
    fn name(&self) -> &'static str {
        "kebab"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        may_delimit(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !may_delimit(&text) {
            return text;
        }
        let out = delimit(text.trim(), "-", |_| true);
        if out == *text {
            return text;
        }
        Cow::Owned(out)
    }
}

/// `false` only when delimiting is guaranteed to be a no-op: no boundary
/// characters, no capitals, and nothing that lowercases differently.
#[inline]
fn may_delimit(text: &str) -> bool {
    if text.is_ascii() {
        return text.bytes().any(|b| {
            b.is_ascii_uppercase() || matches!(b, b'_' | b'-' | 0x0B) || b.is_ascii_whitespace()
        });
    }
    text.chars().any(|c| {
        is_boundary(c) || c.is_uppercase() || !c.to_lowercase().eq(std::iter::once(c))
    })
}

/// Shared word-boundary engine for [`Snake`] and [`Kebab`].
///
/// `splits_after(prev)` decides whether an uppercase letter preceded by `prev`
/// (a non-boundary char inside the current word) opens a new segment.
fn delimit(text: &str, delimiter: &str, splits_after: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut pending = false;
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if is_boundary(c) {
            pending = !out.is_empty();
            prev = None;
            continue;
        }
        if c.is_uppercase() && prev.is_some_and(&splits_after) {
            pending = true;
        }
        if pending {
            out.push_str(delimiter);
            pending = false;
        }
        push_lower(&mut out, c);
        prev = Some(c);
    }
    out
}
