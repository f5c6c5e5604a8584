use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General samples (may or may not trigger changes).
    fn samples(&self) -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", "", "snake_case-and kebab"]
    }

    /// Inputs the stage must hand back untouched, still borrowed.
    fn should_pass_through(&self) -> &'static [&'static str] {
        &[]
    }

    /// Input/output pairs that pin down the transformation.
    fn should_transform(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal contracts:
///
/// 1. `zero_copy_when_no_changes` → pass-through inputs stay borrowed
/// 2. `transforms_known_inputs` → every `should_transform` pair matches
/// 3. `needs_apply_is_accurate` → `false` only when `apply` is a no-op
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives pathological input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {{
        let stage = $stage;
        $crate::testing::stage_contract::zero_copy_when_no_changes(&stage);
        $crate::testing::stage_contract::transforms_known_inputs(&stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii(&stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&stage);
    }};
}

const MIXED_SCRIPTS: &[&str] = &[
    "Hello 世界 мир 🌍",
    "İSTANBUL ıi",
    "ﬁancée ǅemal ß ẞ",
    "\u{200B}\u{FEFF}zero\u{200D}width",
    "a\u{0301}e\u{0308}",
    "  __--  ",
    "ǈ ǋ ǲ",
    "\t\n\r",
    "𝔘𝔫𝔦𝔠𝔬𝔡𝔢",
];

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for &input in stage.should_pass_through() {
        let out = stage.apply(Cow::Borrowed(input));
        assert!(
            matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr() && s.len() == input.len()),
            "stage `{}` allocated for unchanged input {input:?} (got {out:?})",
            stage.name()
        );
        assert!(
            !stage.needs_apply(input) || stage.apply(Cow::Borrowed(input)) == input,
            "stage `{}` changed pass-through input {input:?}",
            stage.name()
        );
    }
}

pub fn transforms_known_inputs<S: StageTestConfig>(stage: &S) {
    for &(input, expected) in stage.should_transform() {
        let out = stage.apply(Cow::Borrowed(input));
        assert_eq!(
            out,
            expected,
            "stage `{}` on {input:?}",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    let inputs = stage
        .samples()
        .iter()
        .chain(stage.should_pass_through())
        .chain(stage.should_transform().iter().map(|(i, _)| i))
        .chain(MIXED_SCRIPTS);

    for &input in inputs {
        let changed = stage.apply(Cow::Borrowed(input)) != input;
        if changed {
            assert!(
                stage.needs_apply(input),
                "stage `{}`: needs_apply returned false but apply changed {input:?}",
                stage.name()
            );
        }
    }
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: &S) {
    let _ = stage.apply(Cow::Borrowed(""));
    let _ = stage.needs_apply("");
    let ascii: String = (0x20u8..0x7F).map(char::from).collect();
    let _ = stage.apply(Cow::Owned(ascii));
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    for &input in MIXED_SCRIPTS {
        let _ = stage.needs_apply(input);
        let _ = stage.apply(Cow::Borrowed(input));
    }
}
