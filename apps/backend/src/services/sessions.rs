//! Session orchestration: drives the pure state machine, owns the RNG,
//! and persists the final outcome exactly once.

use std::sync::Arc;

use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::domain::{
    ReplyAction, ReplyOutcome, SessionConfig, SessionOutcome, SessionState, SubmitOutcome,
    TickOutcome,
};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos;
use crate::repos::completions::CompletionCreate;
use crate::state::app_state::AppState;

/// Where finished sessions get recorded.
#[async_trait]
pub trait OutcomeSink: Send + Sync {
    async fn record_outcome(&self, outcome: &SessionOutcome) -> Result<(), DomainError>;
}

/// Sink that writes a `game_completions` row.
pub struct DbOutcomeSink {
    state: AppState,
}

impl DbOutcomeSink {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl OutcomeSink for DbOutcomeSink {
    async fn record_outcome(&self, outcome: &SessionOutcome) -> Result<(), DomainError> {
        let db = self.state.db().ok_or_else(|| {
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database is not configured")
        })?;
        let create = CompletionCreate::new(
            outcome.user_name.clone(),
            outcome.completion_status.clone(),
        )
        .with_challenges(outcome.challenges_completed, outcome.total_challenges)
        .with_time_taken(outcome.time_taken_seconds);
        repos::completions::create_completion(db, create).await?;
        Ok(())
    }
}

/// One live session: state machine plus RNG plus outcome sink.
pub struct SessionService {
    state: SessionState,
    rng: ChaCha8Rng,
    sink: Arc<dyn OutcomeSink>,
    outcome_recorded: bool,
}

impl SessionService {
    pub fn new(config: SessionConfig, sink: Arc<dyn OutcomeSink>) -> Result<Self, DomainError> {
        Self::with_seed(config, sink, rand::rng().random::<u64>())
    }

    /// Deterministic variant for tests and replays.
    pub fn with_seed(
        config: SessionConfig,
        sink: Arc<dyn OutcomeSink>,
        seed: u64,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            state: SessionState::new(config),
            rng: ChaCha8Rng::seed_from_u64(seed),
            sink,
            outcome_recorded: false,
        })
    }

    pub fn start(&mut self) -> bool {
        self.state.start()
    }

    pub fn pause(&mut self) -> bool {
        self.state.pause()
    }

    pub fn resume(&mut self) -> bool {
        self.state.resume()
    }

    pub async fn tick(&mut self) -> TickOutcome {
        let outcome = self.state.tick(&mut self.rng);
        self.maybe_record().await;
        outcome
    }

    pub async fn reply(&mut self, action: ReplyAction) -> ReplyOutcome {
        let outcome = self.state.reply(action);
        self.maybe_record().await;
        outcome
    }

    pub async fn submit_answer(&mut self, answer: &str) -> SubmitOutcome {
        let outcome = self.state.submit_answer(answer);
        self.maybe_record().await;
        outcome
    }

    /// Back to a fresh idle session; a later finish records again.
    pub fn reset(&mut self) {
        self.state.reset();
        self.outcome_recorded = false;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Record the outcome the first time the session reaches a terminal
    /// phase. The flag flips before the sink call, so a failing sink is
    /// logged and never retried.
    async fn maybe_record(&mut self) {
        if self.outcome_recorded {
            return;
        }
        let Some(outcome) = self.state.outcome() else {
            return;
        };
        self.outcome_recorded = true;
        if let Err(err) = self.sink.record_outcome(&outcome).await {
            warn!(
                error = %err,
                user_name = %outcome.user_name,
                "failed to record session outcome"
            );
        }
    }
}
