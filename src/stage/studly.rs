//! `StudlyCase` and `camelCase` conversion.
//!
//! Both split on runs of boundary characters (`_`, `-`, whitespace) and glue
//! the chunks back together without a separator. They differ in how much of
//! each chunk they touch:
//!
//! | input            | `Studly`          | `Camel`            |
//! |------------------|-------------------|--------------------|
//! | `tymon_designs`  | `TymonDesigns`    | `tymonDesigns`     |
//! | `tymonDesigns`   | `Tymondesigns`    | `tymonDesigns`     |
//! | `chuck_u_t_e`    | `ChuckUTE`        | `chuckUTE`         |
//! | `foo_BAR`        | `FooBar`          | `fooBar`           |
//!
//! `Studly` flattens every chunk to "upper first, lower rest", so an unsplit
//! camel word loses its inner capitals. `Camel` flattens every chunk after
//! the first the same way, but only lowercases the first character of the
//! leading chunk.
use crate::stage::{Stage, chunks, is_boundary, push_lower, push_upper};
use std::borrow::Cow;

pub struct Studly;

pub struct Camel;

impl Stage for Studly {
    fn name(&self) -> &'static str {
        "studly"
    }

    fn needs_apply(&self, text: &str) -> bool {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        is_boundary(first)
            || !first.to_uppercase().eq(std::iter::once(first))
            || chars.any(|c| is_boundary(c) || !c.to_lowercase().eq(std::iter::once(c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        for chunk in chunks(&text) {
            let mut chars = chunk.chars();
            if let Some(first) = chars.next() {
                push_upper(&mut out, first);
            }
            for c in chars {
                push_lower(&mut out, c);
            }
        }
        Cow::Owned(out)
    }
}

impl Stage for Camel {
    fn name(&self) -> &'static str {
        "camel"
    }

    fn needs_apply(&self, text: &str) -> bool {
        text.chars()
            .next()
            .is_some_and(|c| !c.to_lowercase().eq(std::iter::once(c)))
            || text.chars().any(is_boundary)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }

        let mut out = String::with_capacity(text.len());
        for (i, chunk) in chunks(&text).enumerate() {
            let mut chars = chunk.chars();
            if i == 0 {
                // only the head is touched, `tymonDesigns` stays as is
                if let Some(first) = chars.next() {
                    push_lower(&mut out, first);
                }
                out.push_str(chars.as_str());
                continue;
            }
            if let Some(first) = chars.next() {
                push_upper(&mut out, first);
            }
            for c in chars {
                push_lower(&mut out, c);
            }
        }
        Cow::Owned(out)
    }
}
