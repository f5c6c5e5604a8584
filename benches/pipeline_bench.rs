use std::{borrow::Cow, hint::black_box};

use criterion::{Criterion, criterion_group, criterion_main};
use fluent_str::{Limit, LowerCase, Pipeline, Slug, StripWhitespace, Title, of};

const HEADLINES: &[&str] = &[
    "  Crème Brûlée — the 10 best recipes!  ",
    "I ♥ javascript",
    "Съешь же ещё этих мягких французских булок",
    "already-a-slug",
];

fn fluent_vs_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("headline");

    group.bench_function("fluent", |b| {
        b.iter(|| {
            for &h in HEADLINES {
                black_box(of(h).title().limit(24).slug());
            }
        })
    });

    let pipeline = Pipeline::builder()
        .add_stage(Title)
        .add_stage(Limit::new(24))
        .add_stage(Slug::default())
        .build();
    group.bench_function("pipeline", |b| {
        b.iter(|| {
            for &h in HEADLINES {
                black_box(pipeline.process(Cow::Borrowed(h)));
            }
        })
    });

    let closures = Pipeline::builder()
        .pipe(|s| s.trim().to_owned())
        .add_stage(LowerCase)
        .add_stage(StripWhitespace)
        .build();
    group.bench_function("pipeline_with_closure", |b| {
        b.iter(|| {
            for &h in HEADLINES {
                black_box(closures.process(Cow::Borrowed(h)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, fluent_vs_pipeline);
criterion_main!(benches);
