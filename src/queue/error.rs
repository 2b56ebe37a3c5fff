use crate::queue::status::AppointStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("No such {0}")]
    NotFound(&'static str),

    #[error("Invalid status transition from '{from}' to '{to}'")]
    InvalidTransition {
        from: AppointStatus,
        to: AppointStatus,
    },

    #[error("Requested time is in the past")]
    InvalidTime,

    #[error("A finished or cancelled appointment cannot be rescheduled")]
    NotReschedulable,

    #[error("Unknown appointment status '{0}'")]
    UnknownStatus(String),

    #[error("Token allocation failed")]
    Allocation(#[source] diesel::result::Error),

    #[error("DB error")]
    Storage(#[from] diesel::result::Error),
}
