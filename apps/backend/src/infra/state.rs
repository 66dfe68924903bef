//! Application state construction.
//!
//! `build_state()` is the single way to assemble an `AppState`, for both
//! the server binary and tests. The database is optional so that handler
//! tests can run against a state with no pool attached.

use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[derive(Default)]
pub struct StateBuilder {
    db_profile: Option<DbProfile>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a database connection for the given profile.
    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let state = match self.db_profile {
            Some(profile) => {
                let db = connect_db(profile, DbOwner::App).await?;
                AppState::new(db)
            }
            None => AppState::without_db(),
        };
        Ok(state)
    }
}
