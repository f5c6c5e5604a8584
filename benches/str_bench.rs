use std::{borrow::Cow, hint::black_box, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use fluent_str::{
    Ascii, Camel, Kebab, LcFirst, Limit, Slug, Snake, Stage, StripWhitespace, Studly, Title,
    UcFirst, Words,
};

const SAMPLES: &[(&str, &str)] = &[
    ("ascii", "Lorem ipsum dolor sit amet, consectetur adipiscing elit"),
    ("snake", "chuck_her_in_the_u_t_e chuck  -_-  her  -_-  in"),
    ("camel", "chuckHerInTheUTE loremIpsumDolorSitAmet"),
    ("latin", "Crème Brûlée à la carte, naïve façade, Ærøskøbing"),
    ("cyrillic", "Съешь же ещё этих мягких французских булок"),
    ("greek", "Ξεσκεπάζω την ψυχοφθόρα βδελυγμία"),
    ("symbols", "I ♥ javascript @ 20€ — ½ price"),
];

// S is the concrete stage type (e.g. Slug, Studly, ...)
fn stage_benches_auto<S, C>(c: &mut Criterion, stage_name: &str, constructor: C)
where
    S: Stage + 'static,
    C: Fn() -> S,
{
    let mut group = c.benchmark_group(stage_name);

    let mut auto_unchanged = Vec::new();

    for &(label, text) in SAMPLES {
        let stage = constructor();
        auto_unchanged.push((label, stage.apply(Cow::Borrowed(text)).into_owned()));

        group.bench_function(BenchmarkId::new("changed", label), |b| {
            b.iter_batched(
                || text,
                |t| black_box(stage.apply(Cow::Borrowed(t))),
                BatchSize::SmallInput,
            )
        });
    }

    for (label, normalized) in auto_unchanged {
        let stage = constructor();
        let mut zero_copy_hits = 0usize;
        let mut total = 0usize;
        group.bench_function(BenchmarkId::new("unchanged", label), |b| {
            b.iter_batched(
                || normalized.as_str(),
                |t| {
                    total += 1;
                    let result = stage.apply(Cow::Borrowed(t));
                    if matches!(result, Cow::Borrowed(s) if s.as_ptr() == t.as_ptr() && s.len() == t.len()) {
                        zero_copy_hits += 1;
                    }
                },
                BatchSize::SmallInput,
            )
        });
        let pct = if total > 0 {
            (zero_copy_hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        println!("   ZERO-COPY {zero_copy_hits}/{total} ({pct:.2}%)");
    }

    group.finish();
}

fn stage_matrix(c: &mut Criterion) {
    stage_benches_auto(c, "UcFirst", || UcFirst);
    stage_benches_auto(c, "LcFirst", || LcFirst);
    stage_benches_auto(c, "Title", || Title);
    stage_benches_auto(c, "StripWhitespace", || StripWhitespace);
    stage_benches_auto(c, "Studly", || Studly);
    stage_benches_auto(c, "Camel", || Camel);
    stage_benches_auto(c, "Snake", Snake::default);
    stage_benches_auto(c, "Kebab", || Kebab);
    stage_benches_auto(c, "Ascii", || Ascii);
    stage_benches_auto(c, "Slug", Slug::default);
    stage_benches_auto(c, "Limit", || Limit::new(16));
    stage_benches_auto(c, "Words", || Words::new(3));
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(2))
        .warm_up_time(Duration::from_secs(1))
        .noise_threshold(0.015)
        .significance_level(0.05);
    targets = stage_matrix
);
criterion_main!(benches);
