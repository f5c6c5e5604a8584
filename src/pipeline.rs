//! Reusable stage chains.
//!
//! A [`Pipeline`] is the "compile once, run many" counterpart of a fluent
//! [`Str`](crate::Str) chain: the stage list is built once and applied to any
//! number of inputs. Stages whose `needs_apply` pre-check fails are skipped,
//! so text that needs no work comes back borrowed.
use crate::stage::{Stage, pipe::Pipe};
use smallvec::SmallVec;
use std::{borrow::Cow, fmt, sync::Arc};
use tracing::trace;

#[derive(Clone, Default)]
pub struct Pipeline {
    stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Run every stage in order.
    pub fn process<'a>(&self, mut text: Cow<'a, str>) -> Cow<'a, str> {
        for stage in &self.stages {
            if !stage.needs_apply(&text) {
                trace!(stage = stage.name(), "skipping stage");
                continue;
            }
            trace!(stage = stage.name(), len = text.len(), "applying stage");
            text = stage.apply(text);
        }
        text
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}

/// A pipeline is itself a stage, so pipelines nest.
impl Stage for Pipeline {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn needs_apply(&self, text: &str) -> bool {
        self.stages.iter().any(|s| s.needs_apply(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        self.process(text)
    }
}

#[derive(Default)]
pub struct PipelineBuilder {
    stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl PipelineBuilder {
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Append an arbitrary text function as a stage.
    pub fn pipe<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.add_stage(Pipe(f))
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            stages: self.stages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camel, Limit, LowerCase, Slug, StripWhitespace, Title, Words};

    #[test]
    fn runs_stages_in_order() {
        let p = Pipeline::builder()
            .add_stage(Title)
            .add_stage(Limit::new(10))
            .build();
        assert_eq!(p.process(Cow::Borrowed("lorem ipsum dolor sit amet")), "Lorem Ipsu…");
    }

    #[test]
    fn order_matters() {
        let title_then_lower = Pipeline::builder().add_stage(Title).add_stage(LowerCase).build();
        let lower_then_title = Pipeline::builder().add_stage(LowerCase).add_stage(Title).build();
        assert_eq!(title_then_lower.process(Cow::Borrowed("ab cd")), "ab cd");
        assert_eq!(lower_then_title.process(Cow::Borrowed("ab cd")), "Ab Cd");
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let p = Pipeline::default();
        assert!(p.is_empty());
        let input = "anything";
        let out = p.process(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn zero_copy_when_nothing_applies() {
        let p = Pipeline::builder()
            .add_stage(StripWhitespace)
            .add_stage(LowerCase)
            .add_stage(Slug::default())
            .build();
        let input = "already-a-slug";
        let out = p.process(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn closures_and_nesting() {
        let inner = Pipeline::builder()
            .pipe(|s| s.replace("ipsum", "IPSUM"))
            .add_stage(Camel)
            .build();
        let outer = Pipeline::builder()
            .add_stage(Words::new(2).suffix(""))
            .add_stage(inner)
            .build();
        assert_eq!(outer.process(Cow::Borrowed("lorem ipsum dolor")), "loremIPSUM");
        assert_eq!(outer.len(), 2);
        assert_eq!(format!("{outer:?}"), r#"["words", "pipeline"]"#);
    }

    #[test]
    fn pipeline_is_shareable_across_threads() {
        let p = Arc::new(Pipeline::builder().add_stage(Slug::default()).build());
        let handles: Vec<_> = ["Hello World", "Foo Bar"]
            .into_iter()
            .map(|input| {
                let p = Arc::clone(&p);
                std::thread::spawn(move || p.process(Cow::Borrowed(input)).into_owned())
            })
            .collect();
        let out: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(out, ["hello-world", "foo-bar"]);
    }
}
