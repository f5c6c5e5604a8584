pub mod pipeline;
pub mod random;
pub mod stage;
pub mod text;
pub mod transliteration;

#[cfg(test)]
pub(crate) mod testing {
    pub mod stage_contract;
}

use std::borrow::Cow;

pub use pipeline::{Pipeline, PipelineBuilder};
pub use random::{RandomGenerator, random};
pub use stage::Stage;
pub use stage::ascii::Ascii;
pub use stage::case::{LowerCase, UpperCase, is_lower_case, is_upper_case};
pub use stage::first_char::{LcFirst, UcFirst};
pub use stage::limit::{ELLIPSIS, Limit};
pub use stage::pipe::Pipe;
pub use stage::slug::Slug;
pub use stage::snake::{Kebab, Snake};
pub use stage::strip_whitespace::StripWhitespace;
pub use stage::studly::{Camel, Studly};
pub use stage::title::Title;
pub use stage::words::Words;
pub use text::{Str, StrError};

/// Shorthand for [`Str::of`].
#[inline]
pub fn of<'a>(input: impl Into<Cow<'a, str>>) -> Str<'a> {
    Str::of(input)
}
