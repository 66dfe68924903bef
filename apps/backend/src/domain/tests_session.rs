use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::{
    Challenge, Phase, ReplyAction, ReplyOutcome, SessionConfig, SessionState, SubmitOutcome,
    SummonsReason, TickOutcome, CHALLENGES, URGENT_MESSAGE,
};
use crate::entities::game_completions::CompletionStatus;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// A started session with the given timer and urgent probability.
///
/// Probability 0.0 forces every interruption routine; 1.0 forces every
/// interruption urgent.
fn working_session(timer_seconds: u32, urgent_probability: f64) -> SessionState {
    let mut state = SessionState::new(
        SessionConfig::new("tester")
            .with_timer(timer_seconds)
            .with_urgent_probability(urgent_probability),
    );
    assert!(state.start());
    state
}

fn tick_until_message(state: &mut SessionState, rng: &mut ChaCha8Rng) -> TickOutcome {
    loop {
        match state.tick(rng) {
            TickOutcome::Advanced => continue,
            other => return other,
        }
    }
}

#[test]
fn new_session_is_idle_and_ticks_are_ignored() {
    let mut state = SessionState::new(SessionConfig::new("tester"));
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.tick(&mut rng()), TickOutcome::NotRunning);
    assert_eq!(state.elapsed_seconds, 0);
}

#[test]
fn start_only_works_from_idle() {
    let mut state = SessionState::new(SessionConfig::new("tester"));
    assert!(state.start());
    assert_eq!(state.phase, Phase::Working);
    assert!(!state.start());
}

#[test]
fn tick_advances_the_clock_between_interruptions() {
    let mut state = working_session(60, 0.0);
    let mut rng = rng();
    for expected in 1..=14 {
        assert_eq!(state.tick(&mut rng), TickOutcome::Advanced);
        assert_eq!(state.elapsed_seconds, expected);
    }
}

#[test]
fn pause_and_resume_gate_the_clock() {
    let mut state = working_session(60, 0.0);
    let mut rng = rng();

    assert!(state.pause());
    assert_eq!(state.phase, Phase::Paused);
    assert_eq!(state.tick(&mut rng), TickOutcome::NotRunning);
    assert_eq!(state.elapsed_seconds, 0);

    assert!(state.resume());
    assert_eq!(state.tick(&mut rng), TickOutcome::Advanced);
    assert_eq!(state.elapsed_seconds, 1);

    // resume is only valid from Paused, pause only from Working
    assert!(!state.resume());
    assert!(state.pause());
    assert!(!state.pause());
}

#[test]
fn interruption_arrives_every_fifteen_seconds() {
    let mut state = working_session(60, 0.0);
    let mut rng = rng();

    assert_eq!(
        tick_until_message(&mut state, &mut rng),
        TickOutcome::MessageShown { urgent: false }
    );
    assert_eq!(state.elapsed_seconds, 15);
    let message = state.pending_message.clone().unwrap();
    assert!(!message.urgent);
}

#[test]
fn urgent_probability_one_forces_the_urgent_message() {
    let mut state = working_session(60, 1.0);
    let mut rng = rng();

    assert_eq!(
        tick_until_message(&mut state, &mut rng),
        TickOutcome::MessageShown { urgent: true }
    );
    assert_eq!(state.pending_message, Some(URGENT_MESSAGE));
}

#[test]
fn unanswered_message_is_replaced_by_the_next_interruption() {
    let mut state = working_session(60, 1.0);
    let mut rng = rng();

    tick_until_message(&mut state, &mut rng);
    assert_eq!(state.elapsed_seconds, 15);

    // no reply; the next interruption overwrites, nothing queues up
    assert_eq!(
        tick_until_message(&mut state, &mut rng),
        TickOutcome::MessageShown { urgent: true }
    );
    assert_eq!(state.elapsed_seconds, 30);
    assert_eq!(state.pending_message, Some(URGENT_MESSAGE));
    assert_eq!(state.urgent_ignores, 0);
}

#[test]
fn timer_expiry_wins_over_an_interruption_on_the_same_second() {
    let mut state = working_session(30, 1.0);
    let mut rng = rng();

    // second 15: urgent message arrives and stays pending
    tick_until_message(&mut state, &mut rng);
    assert!(state.pending_message.is_some());

    // second 30 is both a boundary and the deadline
    assert_eq!(
        tick_until_message(&mut state, &mut rng),
        TickOutcome::TimedOut
    );
    assert_eq!(
        state.phase,
        Phase::Courtroom {
            reason: SummonsReason::OutOfTime
        }
    );
    assert_eq!(state.pending_message, None);
}

#[test]
fn ticks_stop_once_the_session_is_over() {
    let mut state = working_session(1, 0.0);
    let mut rng = rng();

    assert_eq!(state.tick(&mut rng), TickOutcome::TimedOut);
    assert_eq!(state.tick(&mut rng), TickOutcome::NotRunning);
    assert_eq!(state.elapsed_seconds, 1);
}

#[test]
fn routine_messages_dismiss_without_consequence() {
    let mut state = working_session(60, 0.0);
    let mut rng = rng();

    tick_until_message(&mut state, &mut rng);
    assert_eq!(state.reply(ReplyAction::Ignore), ReplyOutcome::Dismissed);
    assert_eq!(state.urgent_ignores, 0);
    assert_eq!(state.pending_message, None);

    tick_until_message(&mut state, &mut rng);
    assert_eq!(state.reply(ReplyAction::Respond), ReplyOutcome::Dismissed);
    assert_eq!(state.urgent_ignores, 0);
}

#[test]
fn reply_without_a_pending_message_is_a_no_op() {
    let mut state = working_session(60, 0.0);
    assert_eq!(state.reply(ReplyAction::Respond), ReplyOutcome::NoMessage);

    let mut idle = SessionState::new(SessionConfig::new("tester"));
    assert_eq!(idle.reply(ReplyAction::Ignore), ReplyOutcome::NoMessage);
}

#[test]
fn answering_the_urgent_message_clears_the_ignore_count() {
    let mut state = working_session(120, 1.0);
    let mut rng = rng();

    tick_until_message(&mut state, &mut rng);
    assert_eq!(state.reply(ReplyAction::Ignore), ReplyOutcome::Warned);
    assert_eq!(state.urgent_ignores, 1);

    tick_until_message(&mut state, &mut rng);
    assert_eq!(state.reply(ReplyAction::Respond), ReplyOutcome::Answered);
    assert_eq!(state.urgent_ignores, 0);
    assert_eq!(state.phase, Phase::Working);
}

#[test]
fn ignoring_the_urgent_message_twice_ends_in_the_courtroom() {
    let mut state = working_session(120, 1.0);
    let mut rng = rng();

    tick_until_message(&mut state, &mut rng);
    assert_eq!(state.reply(ReplyAction::Ignore), ReplyOutcome::Warned);

    tick_until_message(&mut state, &mut rng);
    assert_eq!(state.reply(ReplyAction::Ignore), ReplyOutcome::Summoned);
    assert_eq!(
        state.phase,
        Phase::Courtroom {
            reason: SummonsReason::IgnoredUrgent
        }
    );
}

#[test]
fn one_ignore_forces_the_next_interruption_urgent() {
    // probability zero, so only the ignore counter can make it urgent
    let mut state = working_session(120, 0.0);
    let mut rng = rng();

    tick_until_message(&mut state, &mut rng);
    state.urgent_ignores = 1;
    state.pending_message = None;

    assert_eq!(
        tick_until_message(&mut state, &mut rng),
        TickOutcome::MessageShown { urgent: true }
    );
    assert_eq!(state.pending_message, Some(URGENT_MESSAGE));
}

#[test]
fn correct_answers_walk_the_challenge_ladder() {
    let mut state = working_session(600, 0.0);

    for (i, challenge) in CHALLENGES.iter().enumerate() {
        assert_eq!(state.challenge_index, i);
        assert_eq!(state.current_challenge(), Some(&CHALLENGES[i]));
        let outcome = state.submit_answer(challenge.answer);
        if i + 1 == CHALLENGES.len() {
            assert_eq!(outcome, SubmitOutcome::Won);
        } else {
            assert_eq!(outcome, SubmitOutcome::Correct { next_index: i + 1 });
        }
    }

    assert_eq!(state.phase, Phase::Victory);
    assert_eq!(state.current_challenge(), None);
}

#[test]
fn answers_are_compared_after_whitespace_normalization() {
    let mut state = working_session(60, 0.0);

    // padded, with collapsed newlines and doubled spaces
    let sloppy = "  def greet(name):\n\n    print(\"Hello \"  +  name)  ";
    assert_eq!(
        state.submit_answer(sloppy),
        SubmitOutcome::Correct { next_index: 1 }
    );
}

#[test]
fn wrong_answers_leave_the_ladder_in_place() {
    let mut state = working_session(60, 0.0);

    assert_eq!(
        state.submit_answer("def greet(name): pass"),
        SubmitOutcome::Incorrect
    );
    assert_eq!(state.challenge_index, 0);
    assert_eq!(state.phase, Phase::Working);
}

#[test]
fn the_wrong_answer_flag_clears_after_three_ticks() {
    let mut state = working_session(60, 0.0);
    let mut rng = rng();

    state.submit_answer("nope");
    assert!(state.answer_error_active());

    state.tick(&mut rng);
    state.tick(&mut rng);
    assert!(state.answer_error_active());
    state.tick(&mut rng);
    assert!(!state.answer_error_active());
}

#[test]
fn a_correct_answer_clears_the_wrong_answer_flag() {
    let mut state = working_session(60, 0.0);

    state.submit_answer("nope");
    assert!(state.answer_error_active());

    assert_eq!(
        state.submit_answer(CHALLENGES[0].answer),
        SubmitOutcome::Correct { next_index: 1 }
    );
    assert!(!state.answer_error_active());
}

#[test]
fn config_validation_rejects_unplayable_setups() {
    assert!(SessionConfig::new("tester").validate().is_ok());
    assert!(SessionConfig::new("tester").with_timer(0).validate().is_err());
    assert!(SessionConfig::new("tester")
        .with_challenges(Vec::new())
        .validate()
        .is_err());

    let blank_prompt = Challenge {
        prompt: "   ",
        code: "x = 1",
        answer: "x = 1",
        hint: "",
    };
    assert!(SessionConfig::new("tester")
        .with_challenges(vec![blank_prompt])
        .validate()
        .is_err());
}

#[test]
fn a_custom_challenge_set_drives_the_ladder() {
    let ladder = vec![
        Challenge {
            prompt: "Fix the typo:",
            code: "pritn(1)",
            answer: "print(1)",
            hint: "Function name",
        },
        Challenge {
            prompt: "Fix the operator:",
            code: "x = 1 +* 2",
            answer: "x = 1 + 2",
            hint: "One operator too many",
        },
    ];
    let mut state = SessionState::new(SessionConfig::new("tester").with_challenges(ladder));
    assert!(state.start());

    assert_eq!(
        state.submit_answer("print(1)"),
        SubmitOutcome::Correct { next_index: 1 }
    );
    assert_eq!(state.submit_answer("x = 1 + 2"), SubmitOutcome::Won);

    let outcome = state.outcome().unwrap();
    assert_eq!(outcome.challenges_completed, 2);
    assert_eq!(outcome.total_challenges, 2);
}

#[test]
fn submissions_are_rejected_outside_the_working_phase() {
    let mut state = SessionState::new(SessionConfig::new("tester"));
    assert_eq!(
        state.submit_answer(CHALLENGES[0].answer),
        SubmitOutcome::NotRunning
    );

    let mut paused = working_session(60, 0.0);
    paused.pause();
    assert_eq!(
        paused.submit_answer(CHALLENGES[0].answer),
        SubmitOutcome::NotRunning
    );
}

#[test]
fn answers_are_rejected_while_a_message_is_pending() {
    let mut state = working_session(600, 0.0);
    let mut rng = rng();

    tick_until_message(&mut state, &mut rng);
    assert!(state.pending_message.is_some());

    assert_eq!(
        state.submit_answer(CHALLENGES[0].answer),
        SubmitOutcome::NotRunning
    );
    assert_eq!(state.challenge_index, 0);

    // the same answer lands once the message is handled
    state.reply(ReplyAction::Respond);
    assert_eq!(
        state.submit_answer(CHALLENGES[0].answer),
        SubmitOutcome::Correct { next_index: 1 }
    );
}

#[test]
fn reset_returns_to_a_fresh_idle_state() {
    let mut state = working_session(30, 1.0);
    let mut rng = rng();

    tick_until_message(&mut state, &mut rng);
    state.reply(ReplyAction::Ignore);
    state.submit_answer(CHALLENGES[0].answer);
    tick_until_message(&mut state, &mut rng);

    state.reset();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.elapsed_seconds, 0);
    assert_eq!(state.pending_message, None);
    assert_eq!(state.urgent_ignores, 0);
    assert_eq!(state.challenge_index, 0);
    assert_eq!(state.answer_error_until, None);
    assert_eq!(state.config.timer_seconds, 30);

    // a reset session can be started again
    assert!(state.start());
}

#[test]
fn outcome_is_none_while_the_session_is_live() {
    let mut state = SessionState::new(SessionConfig::new("tester"));
    assert_eq!(state.outcome(), None);
    state.start();
    assert_eq!(state.outcome(), None);
    state.pause();
    assert_eq!(state.outcome(), None);
}

#[test]
fn victory_outcome_records_a_completed_run() {
    let mut state = working_session(600, 0.0);
    let mut rng = rng();
    for _ in 0..20 {
        state.tick(&mut rng);
        state.pending_message = None;
    }
    for challenge in &CHALLENGES {
        state.submit_answer(challenge.answer);
    }

    let outcome = state.outcome().unwrap();
    assert_eq!(outcome.user_name, "tester");
    assert_eq!(outcome.completion_status, CompletionStatus::Completed);
    assert_eq!(outcome.challenges_completed, 5);
    assert_eq!(outcome.total_challenges, 5);
    assert_eq!(outcome.time_taken_seconds, 20);
}

#[test]
fn timeout_outcome_records_a_failed_run() {
    let mut state = working_session(16, 0.0);
    let mut rng = rng();

    state.submit_answer(CHALLENGES[0].answer);
    loop {
        match state.tick(&mut rng) {
            TickOutcome::TimedOut => break,
            TickOutcome::MessageShown { .. } | TickOutcome::Advanced => continue,
            TickOutcome::NotRunning => panic!("session stopped before timing out"),
        }
    }

    let outcome = state.outcome().unwrap();
    assert_eq!(outcome.completion_status, CompletionStatus::Failed);
    assert_eq!(outcome.challenges_completed, 1);
    assert_eq!(outcome.total_challenges, 5);
    assert_eq!(outcome.time_taken_seconds, 16);
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |seed: u64| {
        let mut state = working_session(60, 0.25);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shown = Vec::new();
        loop {
            match state.tick(&mut rng) {
                TickOutcome::MessageShown { urgent } => {
                    shown.push((state.elapsed_seconds, urgent));
                    state.pending_message = None;
                }
                TickOutcome::TimedOut => break,
                TickOutcome::Advanced => {}
                TickOutcome::NotRunning => break,
            }
        }
        shown
    };

    assert_eq!(run(7), run(7));
}
