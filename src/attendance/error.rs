use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PunchError {
    #[error("You have already clocked in today")]
    AlreadyClockedIn { clock_in_time: DateTime<Utc> },

    #[error("Please clock in first")]
    MissingClockIn,

    #[error("You have already clocked out today")]
    AlreadyClockedOut,

    #[error("Today's record cannot be completed: {0}")]
    InsufficientData(String),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl PunchError {
    /// Whether the user can fix this themselves, as opposed to a storage failure.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, PunchError::Store(_))
    }
}
