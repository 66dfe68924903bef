//! Pure game logic for debugging sessions.
//!
//! No IO and no async here: the session state machine, the challenge
//! ladder, and the interruption messages. Services wire this up to the
//! clock, the RNG, and persistence.

pub mod challenges;
pub mod messages;
pub mod session;

#[cfg(test)]
mod tests_props_answers;
#[cfg(test)]
mod tests_session;

pub use challenges::{normalize_code, Challenge, CHALLENGES};
pub use messages::{Message, ROUTINE_MESSAGES, URGENT_MESSAGE};
pub use session::{
    Phase, ReplyAction, ReplyOutcome, SessionConfig, SessionOutcome, SessionState, SubmitOutcome,
    SummonsReason, TickOutcome, ANSWER_ERROR_SECONDS, DEFAULT_TIMER_SECONDS,
    INTERRUPTION_INTERVAL_SECONDS, URGENT_IGNORES_TO_SUMMON, URGENT_PROBABILITY,
};
