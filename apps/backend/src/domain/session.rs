//! Pure state machine for one debugging session.
//!
//! The session runs on one-second ticks. Every fifteen seconds a message
//! interrupts the player; most are routine, but the urgent accessibility
//! complaint must be answered. Ignoring it twice, or running out the
//! timer, ends the run in the courtroom. Fixing every challenge before
//! the timer expires wins.
//!
//! Nothing here performs IO. Randomness comes in through the `Rng`
//! argument to `tick` so behavior is reproducible under a seeded
//! generator.

use rand::Rng;

use crate::domain::challenges::{normalize_code, Challenge, CHALLENGES};
use crate::domain::messages::{Message, ROUTINE_MESSAGES, URGENT_MESSAGE};
use crate::entities::game_completions::CompletionStatus;
use crate::errors::domain::DomainError;

pub const DEFAULT_TIMER_SECONDS: u32 = 60;
pub const INTERRUPTION_INTERVAL_SECONDS: u32 = 15;
pub const URGENT_IGNORES_TO_SUMMON: u32 = 2;
pub const URGENT_PROBABILITY: f64 = 0.25;
/// How long the wrong-answer flag stays up before ticks clear it.
pub const ANSWER_ERROR_SECONDS: u32 = 3;

/// Immutable per-session settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub player_name: String,
    pub timer_seconds: u32,
    pub urgent_probability: f64,
    pub challenges: Vec<Challenge>,
}

impl SessionConfig {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            timer_seconds: DEFAULT_TIMER_SECONDS,
            urgent_probability: URGENT_PROBABILITY,
            challenges: CHALLENGES.to_vec(),
        }
    }

    pub fn with_timer(mut self, seconds: u32) -> Self {
        self.timer_seconds = seconds;
        self
    }

    pub fn with_urgent_probability(mut self, probability: f64) -> Self {
        self.urgent_probability = probability;
        self
    }

    /// Replace the built-in ladder with a custom challenge set.
    pub fn with_challenges(mut self, challenges: Vec<Challenge>) -> Self {
        self.challenges = challenges;
        self
    }

    /// Reject configurations a session cannot be played against.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.timer_seconds == 0 {
            return Err(DomainError::validation("timer limit must be positive"));
        }
        if self.challenges.is_empty() {
            return Err(DomainError::validation(
                "at least one challenge is required",
            ));
        }
        if self
            .challenges
            .iter()
            .any(|c| c.prompt.trim().is_empty() || c.answer.trim().is_empty())
        {
            return Err(DomainError::validation(
                "challenge prompts and answers cannot be blank",
            ));
        }
        Ok(())
    }
}

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Working,
    Paused,
    Victory,
    Courtroom { reason: SummonsReason },
}

/// Why the player ended up in the courtroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummonsReason {
    IgnoredUrgent,
    OutOfTime,
}

/// Result of advancing the clock by one second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened beyond the second passing.
    Advanced,
    /// The timer expired; the session is over.
    TimedOut,
    /// An interruption arrived and is now pending.
    MessageShown { urgent: bool },
    /// The session is not in the working phase.
    NotRunning,
}

/// How the player handles the pending message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyAction {
    Respond,
    Ignore,
}

/// Result of replying to (or ignoring) the pending message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// A routine message was cleared; no consequence either way.
    Dismissed,
    /// The urgent message was answered; the ignore counter resets.
    Answered,
    /// The urgent message was ignored once; one more ends the run.
    Warned,
    /// The urgent message was ignored again; the session is over.
    Summoned,
    /// There was no pending message to act on.
    NoMessage,
}

/// Result of submitting a fix for the current challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The fix was right; play continues on the next challenge.
    Correct { next_index: usize },
    /// The fix was right and it was the last challenge.
    Won,
    Incorrect,
    NotRunning,
}

/// Final result of a finished session, ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub user_name: String,
    pub completion_status: CompletionStatus,
    pub challenges_completed: i32,
    pub total_challenges: i32,
    pub time_taken_seconds: i32,
}

/// Full state of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: Phase,
    pub config: SessionConfig,
    pub elapsed_seconds: u32,
    pub pending_message: Option<Message>,
    pub urgent_ignores: u32,
    pub challenge_index: usize,
    /// Second at which the wrong-answer flag expires, when one is up.
    pub answer_error_until: Option<u32>,
}

impl SessionState {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            phase: Phase::Idle,
            config,
            elapsed_seconds: 0,
            pending_message: None,
            urgent_ignores: 0,
            challenge_index: 0,
            answer_error_until: None,
        }
    }

    /// Begin play. Only valid from `Idle`; the clock starts at zero.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Working;
        self.elapsed_seconds = 0;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Working {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Working;
        true
    }

    /// Advance the clock by one second.
    ///
    /// Timer expiry takes precedence over interruptions: when the final
    /// second also lands on an interruption boundary, the session times
    /// out and no message is shown. A new interruption replaces any
    /// message still pending.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickOutcome {
        if self.phase != Phase::Working {
            return TickOutcome::NotRunning;
        }

        self.elapsed_seconds += 1;

        if let Some(until) = self.answer_error_until {
            if self.elapsed_seconds >= until {
                self.answer_error_until = None;
            }
        }

        if self.elapsed_seconds >= self.config.timer_seconds {
            self.phase = Phase::Courtroom {
                reason: SummonsReason::OutOfTime,
            };
            self.pending_message = None;
            return TickOutcome::TimedOut;
        }

        if self.elapsed_seconds % INTERRUPTION_INTERVAL_SECONDS == 0 {
            // Once the urgent message has been ignored, it keeps coming
            // back until answered or escalated.
            let urgent = self.urgent_ignores > 0
                || rng.random::<f64>() < self.config.urgent_probability;
            let message = if urgent {
                URGENT_MESSAGE.clone()
            } else {
                ROUTINE_MESSAGES[rng.random_range(0..ROUTINE_MESSAGES.len())].clone()
            };
            self.pending_message = Some(message);
            return TickOutcome::MessageShown { urgent };
        }

        TickOutcome::Advanced
    }

    /// Act on the pending message.
    pub fn reply(&mut self, action: ReplyAction) -> ReplyOutcome {
        if self.phase != Phase::Working {
            return ReplyOutcome::NoMessage;
        }
        let Some(message) = self.pending_message.take() else {
            return ReplyOutcome::NoMessage;
        };

        if !message.urgent {
            return ReplyOutcome::Dismissed;
        }

        match action {
            ReplyAction::Respond => {
                self.urgent_ignores = 0;
                ReplyOutcome::Answered
            }
            ReplyAction::Ignore => {
                self.urgent_ignores += 1;
                if self.urgent_ignores >= URGENT_IGNORES_TO_SUMMON {
                    self.phase = Phase::Courtroom {
                        reason: SummonsReason::IgnoredUrgent,
                    };
                    ReplyOutcome::Summoned
                } else {
                    ReplyOutcome::Warned
                }
            }
        }
    }

    /// Submit a fix for the current challenge.
    ///
    /// Both sides are whitespace-normalized before comparison. Answers
    /// are not accepted while a message is waiting for a reply; a wrong
    /// answer raises a flag that ticks clear after a few seconds.
    pub fn submit_answer(&mut self, answer: &str) -> SubmitOutcome {
        if self.phase != Phase::Working || self.pending_message.is_some() {
            return SubmitOutcome::NotRunning;
        }
        let Some(challenge) = self.config.challenges.get(self.challenge_index).copied() else {
            return SubmitOutcome::NotRunning;
        };

        if normalize_code(answer) != normalize_code(challenge.answer) {
            self.answer_error_until = Some(self.elapsed_seconds + ANSWER_ERROR_SECONDS);
            return SubmitOutcome::Incorrect;
        }

        self.answer_error_until = None;
        self.challenge_index += 1;
        if self.challenge_index == self.config.challenges.len() {
            self.phase = Phase::Victory;
            SubmitOutcome::Won
        } else {
            SubmitOutcome::Correct {
                next_index: self.challenge_index,
            }
        }
    }

    /// Throw the session back to a fresh `Idle` state, keeping the
    /// configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    pub fn current_challenge(&self) -> Option<&Challenge> {
        self.config.challenges.get(self.challenge_index)
    }

    /// True while the wrong-answer flag from the last submission is up.
    pub fn answer_error_active(&self) -> bool {
        self.answer_error_until.is_some()
    }

    /// The persistable outcome, once the session has finished.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        let completion_status = match &self.phase {
            Phase::Victory => CompletionStatus::Completed,
            Phase::Courtroom { .. } => CompletionStatus::Failed,
            _ => return None,
        };
        Some(SessionOutcome {
            user_name: self.config.player_name.clone(),
            completion_status,
            challenges_completed: self.challenge_index as i32,
            total_challenges: self.config.challenges.len() as i32,
            time_taken_seconds: self.elapsed_seconds as i32,
        })
    }
}
