#[cfg(test)]
mod integration_tests {

    use crate::{Limit, Pipeline, Slug, Str, Title, of};

    #[test]
    fn chain_title_then_limit() {
        let s = of("lorem ipsum dolor sit amet").title().limit(10).into_string();
        assert_eq!(s, "Lorem Ipsu…");
    }

    #[test]
    fn chain_camel_then_predicate() {
        let ends = of("lorem ipsum dolor sit amet")
            .camel()
            .limit(13)
            .ends_with("loremIpsumDol…");
        assert!(ends);
    }

    #[test]
    fn chain_through_pipe() {
        let s = of("lorem ipsum dolor sit amet")
            .title()
            .pipe(|s| s.to_lowercase())
            .limit(10)
            .into_string();
        assert_eq!(s, "lorem ipsu…");
    }

    #[test]
    fn chain_is_zero_copy_on_clean_input() {
        let input = "already-a-slug";
        let s = of(input).strip().ascii().slug().limit(100);
        assert!(s.is_borrowed());
        assert_eq!(s.get().as_ptr(), input.as_ptr());
    }

    #[test]
    fn receiver_is_left_untouched() {
        let original = of("Hello World");
        let changed = original.clone().snake();
        assert_eq!(original, "Hello World");
        assert_eq!(changed, "hello_world");
    }

    #[test]
    fn pipeline_matches_fluent_chain() {
        let pipeline = Pipeline::builder()
            .add_stage(Title)
            .add_stage(Limit::new(10))
            .build();
        for input in ["lorem ipsum dolor sit amet", "short", "", "мама мыла раму рано"] {
            let fluent = of(input).title().limit(10);
            let piped = of(input).through(&pipeline);
            assert_eq!(fluent, piped, "input {input:?}");
        }
    }

    #[test]
    fn headline_to_url() {
        let slug = Str::of("  Crème Brûlée — the 10 best recipes!  ")
            .apply(&Slug::default())
            .into_string();
        assert_eq!(slug, "creme-brulee-the-10-best-recipes");
    }

    #[test]
    fn cyrillic_round_trip_through_styles() {
        let s = of("привет_мир").studly();
        assert_eq!(s, "ПриветМир");
        assert_eq!(s.clone().snake(), "привет_мир");
        assert_eq!(s.slug(), "privetmir");
    }
}
