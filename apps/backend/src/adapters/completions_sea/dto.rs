use crate::entities::game_completions::CompletionStatus;

/// DTO for creating a game completion row.
#[derive(Debug, Clone)]
pub struct CompletionCreate {
    pub user_name: String,
    pub status: CompletionStatus,
    pub challenges_completed: Option<i32>,
    pub total_challenges: Option<i32>,
    pub time_taken: Option<i32>,
}

impl CompletionCreate {
    pub fn new(user_name: impl Into<String>, status: CompletionStatus) -> Self {
        Self {
            user_name: user_name.into(),
            status,
            challenges_completed: None,
            total_challenges: None,
            time_taken: None,
        }
    }

    pub fn with_challenges(mut self, completed: i32, total: i32) -> Self {
        self.challenges_completed = Some(completed);
        self.total_challenges = Some(total);
        self
    }

    pub fn with_time_taken(mut self, seconds: i32) -> Self {
        self.time_taken = Some(seconds);
        self
    }
}

/// DTO for updating a game completion row.
///
/// The three numeric fields are double-optional: the outer `Option`
/// distinguishes "leave unchanged" (`None`) from "write this value"
/// (`Some(inner)`), and the inner `Option` allows writing NULL
/// (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct CompletionUpdate {
    pub id: i64,
    pub user_name: Option<String>,
    pub status: Option<CompletionStatus>,
    pub challenges_completed: Option<Option<i32>>,
    pub total_challenges: Option<Option<i32>>,
    pub time_taken: Option<Option<i32>>,
}

impl CompletionUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn status(mut self, status: CompletionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn challenges_completed(mut self, value: Option<i32>) -> Self {
        self.challenges_completed = Some(value);
        self
    }

    pub fn total_challenges(mut self, value: Option<i32>) -> Self {
        self.total_challenges = Some(value);
        self
    }

    pub fn time_taken(mut self, value: Option<i32>) -> Self {
        self.time_taken = Some(value);
        self
    }

    /// True when no field would change.
    pub fn is_noop(&self) -> bool {
        self.user_name.is_none()
            && self.status.is_none()
            && self.challenges_completed.is_none()
            && self.total_challenges.is_none()
            && self.time_taken.is_none()
    }
}
