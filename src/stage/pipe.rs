use crate::stage::Stage;
use std::borrow::Cow;

/// Wraps an arbitrary `Fn(&str) -> String` so external logic can sit inside a
/// [`Pipeline`](crate::pipeline::Pipeline) next to the built-in stages.
///
/// The closure always runs (there is no way to pre-check it), but the input
/// stays borrowed when the closure hands back identical text.
pub struct Pipe<F>(pub F);

impl<F> Stage for Pipe<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn name(&self) -> &'static str {
        "pipe"
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let out = (self.0)(&text);
        if out == *text {
            return text;
        }
        Cow::Owned(out)
    }
}
