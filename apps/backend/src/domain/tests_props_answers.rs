use proptest::prelude::*;

use crate::domain::challenges::{normalize_code, CHALLENGES};
use crate::domain::{SessionConfig, SessionState, SubmitOutcome};

fn whitespace() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![" ", "\t", "\n", "  "]), 1..4)
        .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn normalization_is_idempotent(s in "\\PC{0,64}") {
        let once = normalize_code(&s);
        prop_assert_eq!(normalize_code(&once), once);
    }

    #[test]
    fn normalization_ignores_leading_and_trailing_whitespace(
        s in "\\PC{0,64}",
        lead in whitespace(),
        trail in whitespace(),
    ) {
        let padded = format!("{lead}{s}{trail}");
        prop_assert_eq!(normalize_code(&padded), normalize_code(&s));
    }

    #[test]
    fn normalized_output_is_single_spaced(s in "\\PC{0,64}") {
        let normalized = normalize_code(&s);
        prop_assert!(!normalized.contains("  "));
        prop_assert!(!normalized.starts_with(' '));
        prop_assert!(!normalized.ends_with(' '));
        prop_assert!(!normalized.contains('\n'));
        prop_assert!(!normalized.contains('\t'));
    }

    #[test]
    fn reformatted_answers_are_still_accepted(
        index in 0usize..CHALLENGES.len(),
        seps in prop::collection::vec(whitespace(), 32),
    ) {
        let tokens: Vec<&str> = CHALLENGES[index].answer.split_whitespace().collect();
        let mut sloppy = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                sloppy.push_str(&seps[i % seps.len()]);
            }
            sloppy.push_str(token);
        }

        let mut state = SessionState::new(SessionConfig::new("prop"));
        state.start();
        state.challenge_index = index;

        let outcome = state.submit_answer(&sloppy);
        prop_assert!(
            matches!(
                outcome,
                SubmitOutcome::Correct { .. } | SubmitOutcome::Won
            ),
            "expected Correct or Won, got {:?}",
            outcome
        );
    }
}
