use crate::{
    pipeline::Pipeline,
    random::RandomGenerator,
    stage::{
        Stage, char_to_byte, char_to_byte_clamped,
        ascii::Ascii,
        case::{LowerCase, UpperCase, is_lower_case, is_upper_case},
        first_char::{LcFirst, UcFirst},
        limit::Limit,
        slug::Slug,
        snake::{Kebab, Snake},
        strip_whitespace::StripWhitespace,
        studly::{Camel, Studly},
        title::Title,
        words::Words,
    },
};
use memchr::memmem;
use std::{borrow::Cow, fmt};
use thiserror::Error;
use tracing::debug;

/// Length of [`Str::random`].
pub const DEFAULT_RANDOM_LEN: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrError {
    #[error("invalid argument `{0}`: {1}")]
    InvalidArgument(&'static str, String),
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// Fluent wrapper around a piece of text.
///
/// Every transformation consumes the wrapper and returns a new one, so calls
/// chain naturally:
///
/// ```
/// use fluent_str::Str;
///
/// let s = Str::of("lorem ipsum dolor sit amet").title().limit(10);
/// assert_eq!(s.get(), "Lorem Ipsu…");
/// ```
///
/// The payload is a `Cow`: a transformation that changes nothing keeps the
/// original borrow, so chains over already-normalized text never allocate.
///
/// Offsets and lengths count `char`s, never bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Str<'a> {
    payload: Cow<'a, str>,
}

impl<'a> Str<'a> {
    pub fn of(input: impl Into<Cow<'a, str>>) -> Self {
        Self {
            payload: input.into(),
        }
    }

    /// Validate raw bytes and wrap them. Invalid UTF-8 is rejected, never
    /// lossily repaired.
    pub fn from_utf8(bytes: &'a [u8]) -> Result<Self, StrError> {
        #[cfg(feature = "simd")]
        let text = simdutf8::compat::from_utf8(bytes);
        #[cfg(not(feature = "simd"))]
        let text = std::str::from_utf8(bytes);

        text.map(Self::of).map_err(|e| {
            debug!(len = bytes.len(), error = %e, "rejected non-UTF-8 input");
            StrError::InvalidUtf8(e.to_string())
        })
    }

    #[inline]
    pub fn get(&self) -> &str {
        &self.payload
    }

    pub fn into_string(self) -> String {
        self.payload.into_owned()
    }

    pub fn into_cow(self) -> Cow<'a, str> {
        self.payload
    }

    /// `true` while the payload is still the caller's original borrow.
    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self.payload, Cow::Borrowed(_))
    }

    /// Number of `char`s (Unicode scalar values), not UTF-8 bytes or UTF-16
    /// units. Offsets taken by the search methods use the same unit.
    pub fn len(&self) -> usize {
        self.payload.chars().count()
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.payload.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    // ──────────────────────────────────────────────────────────────
    //  Composition
    // ──────────────────────────────────────────────────────────────

    /// Run a single stage, skipping it when its pre-check says so.
    pub fn apply<S: Stage + ?Sized>(self, stage: &S) -> Self {
        if !stage.needs_apply(&self.payload) {
            return self;
        }
        Self {
            payload: stage.apply(self.payload),
        }
    }

    pub fn through(self, pipeline: &Pipeline) -> Self {
        Self {
            payload: pipeline.process(self.payload),
        }
    }

    /// Escape hatch: feed the payload to any text function and keep chaining.
    pub fn pipe<F, R>(self, f: F) -> Self
    where
        F: FnOnce(&str) -> R,
        R: Into<String>,
    {
        let out: String = f(&self.payload).into();
        Self {
            payload: Cow::Owned(out),
        }
    }

    // ──────────────────────────────────────────────────────────────
    //  Case
    // ──────────────────────────────────────────────────────────────

    pub fn ucfirst(self) -> Self {
        self.apply(&UcFirst)
    }

    pub fn lcfirst(self) -> Self {
        self.apply(&LcFirst)
    }

    pub fn lower(self) -> Self {
        self.apply(&LowerCase)
    }

    pub fn upper(self) -> Self {
        self.apply(&UpperCase)
    }

    pub fn title(self) -> Self {
        self.apply(&Title)
    }

    pub fn is_lower_case(&self) -> bool {
        is_lower_case(&self.payload)
    }

    pub fn is_upper_case(&self) -> bool {
        is_upper_case(&self.payload)
    }

    // ──────────────────────────────────────────────────────────────
    //  Search
    // ──────────────────────────────────────────────────────────────

    pub fn contains(&self, needle: &str) -> bool {
        self.contains_from(needle, 0)
    }

    /// `needle` occurs at or after character `from`. A `from` past the end is
    /// never a match.
    pub fn contains_from(&self, needle: &str, from: usize) -> bool {
        let Some(start) = char_to_byte(&self.payload, from) else {
            return false;
        };
        memmem::find(&self.payload.as_bytes()[start..], needle.as_bytes()).is_some()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.payload.starts_with(prefix)
    }

    /// The text starting at character `offset` begins with `prefix`.
    /// `offset` is clamped to the end.
    pub fn starts_with_at(&self, prefix: &str, offset: usize) -> bool {
        let start = char_to_byte_clamped(&self.payload, offset);
        self.payload[start..].starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.payload.ends_with(suffix)
    }

    /// The first `end` characters end with `suffix`. `end` is clamped to the
    /// length.
    pub fn ends_with_at(&self, suffix: &str, end: usize) -> bool {
        let end = char_to_byte_clamped(&self.payload, end);
        self.payload[..end].ends_with(suffix)
    }

    // ──────────────────────────────────────────────────────────────
    //  Truncation
    // ──────────────────────────────────────────────────────────────

    pub fn limit(self, max: usize) -> Self {
        self.apply(&Limit::new(max))
    }

    pub fn limit_with(self, max: usize, suffix: &str) -> Self {
        self.apply(&Limit::new(max).suffix(suffix))
    }

    pub fn words(self, max: usize) -> Self {
        self.apply(&Words::new(max))
    }

    pub fn words_with(self, max: usize, suffix: &str) -> Self {
        self.apply(&Words::new(max).suffix(suffix))
    }

    // ──────────────────────────────────────────────────────────────
    //  Styles
    // ──────────────────────────────────────────────────────────────

    pub fn strip(self) -> Self {
        self.apply(&StripWhitespace)
    }

    pub fn studly(self) -> Self {
        self.apply(&Studly)
    }

    pub fn camel(self) -> Self {
        self.apply(&Camel)
    }

    pub fn snake(self) -> Self {
        self.apply(&Snake::default())
    }

    pub fn snake_with(self, delimiter: &str) -> Self {
        self.apply(&Snake::with_delimiter(delimiter))
    }

    pub fn kebab(self) -> Self {
        self.apply(&Kebab)
    }

    // ──────────────────────────────────────────────────────────────
    //  ASCII & slugs
    // ──────────────────────────────────────────────────────────────

    pub fn ascii(self) -> Self {
        self.apply(&Ascii)
    }

    pub fn slug(self) -> Self {
        self.apply(&Slug::default())
    }

    pub fn slug_with(self, separator: &str) -> Self {
        self.apply(&Slug::with_separator(separator))
    }
}

impl Str<'static> {
    /// 32 random characters from `[A-Za-z0-9]`.
    pub fn random() -> Self {
        Self::random_with_len(DEFAULT_RANDOM_LEN)
    }

    pub fn random_with_len(len: usize) -> Self {
        Self::of(RandomGenerator::new().generate(len))
    }
}

impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}

impl AsRef<str> for Str<'_> {
    fn as_ref(&self) -> &str {
        &self.payload
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(s: &'a str) -> Self {
        Self::of(s)
    }
}

impl From<String> for Str<'_> {
    fn from(s: String) -> Self {
        Self::of(s)
    }
}

impl<'a> From<Cow<'a, str>> for Str<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Self { payload: s }
    }
}

impl From<Str<'_>> for String {
    fn from(s: Str<'_>) -> Self {
        s.into_string()
    }
}

impl<'a> TryFrom<&'a [u8]> for Str<'a> {
    type Error = StrError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Self::from_utf8(bytes)
    }
}

impl TryFrom<Vec<u8>> for Str<'static> {
    type Error = StrError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        String::from_utf8(bytes).map(Self::of).map_err(|e| {
            debug!(error = %e, "rejected non-UTF-8 input");
            StrError::InvalidUtf8(e.utf8_error().to_string())
        })
    }
}

impl PartialEq<str> for Str<'_> {
    fn eq(&self, other: &str) -> bool {
        *self.payload == *other
    }
}

impl PartialEq<&str> for Str<'_> {
    fn eq(&self, other: &&str) -> bool {
        *self.payload == **other
    }
}
