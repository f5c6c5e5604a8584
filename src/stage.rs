//! Core transformation stage abstraction.
//!
//! Every fluent method on [`Str`](crate::Str) is backed by a stage. A stage is a
//! small value (usually zero-sized) that knows how to rewrite a `Cow<str>`:
//!
//! * `needs_apply` is a cheap pre-check. Returning `false` lets callers skip
//!   the stage entirely and keep the text borrowed.
//! * `apply` performs the rewrite and must return the input untouched
//!   (`Cow::Borrowed` stays borrowed) when nothing changes.
//!
//! Stages are `Send + Sync` so the same value can be shared between threads
//! inside a [`Pipeline`](crate::pipeline::Pipeline).

pub mod ascii;
pub mod case;
pub mod first_char;
pub mod limit;
pub mod pipe;
pub mod slug;
pub mod snake;
pub mod strip_whitespace;
pub mod studly;
pub mod title;
pub mod words;

use std::borrow::Cow;

/// A single text transformation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and test diagnostics.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` means `apply` would be a no-op.
    ///
    /// The default is conservative and always runs the stage.
    #[inline]
    fn needs_apply(&self, _text: &str) -> bool {
        true
    }

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without consulting `needs_apply` first.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

impl<S: Stage + ?Sized> Stage for &S {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        (**self).needs_apply(text)
    }

    #[inline]
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        (**self).apply(text)
    }
}

/// Boundary characters separate words in the case-style conversions.
#[inline(always)]
pub(crate) fn is_boundary(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

/// Split `text` on runs of boundary characters, skipping empty chunks.
#[inline]
pub(crate) fn chunks(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_boundary).filter(|chunk| !chunk.is_empty())
}

/// Push `c` uppercased (may expand, e.g. `ß` → `SS`).
#[inline(always)]
pub(crate) fn push_upper(out: &mut String, c: char) {
    out.extend(c.to_uppercase());
}

/// Push `c` lowercased (may expand, e.g. `İ` → `i̇`).
#[inline(always)]
pub(crate) fn push_lower(out: &mut String, c: char) {
    out.extend(c.to_lowercase());
}

/// Byte offset of the `n`-th character, or `None` when `n` is past the end.
/// `n == char count` maps to `text.len()`.
#[inline]
pub(crate) fn char_to_byte(text: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    match text.char_indices().nth(n) {
        Some((idx, _)) => Some(idx),
        None if text.chars().count() == n => Some(text.len()),
        None => None,
    }
}

/// Like [`char_to_byte`] but clamps `n` to the end of the text.
#[inline]
pub(crate) fn char_to_byte_clamped(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map_or(text.len(), |(idx, _)| idx)
}
