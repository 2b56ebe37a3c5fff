use crate::queue::error::QueueError;
use std::fmt;

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_CONFIRMED: &str = "CONFIRMED";
pub const STATUS_COMPLETED: &str = "COMPLETED";
pub const STATUS_CANCELLED: &str = "CANCELLED";

pub const NON_TERMINAL_STATUSES: [&str; 2] = [STATUS_PENDING, STATUS_CONFIRMED];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointStatus::Pending => STATUS_PENDING,
            AppointStatus::Confirmed => STATUS_CONFIRMED,
            AppointStatus::Completed => STATUS_COMPLETED,
            AppointStatus::Cancelled => STATUS_CANCELLED,
        }
    }

    pub fn parse(s: &str) -> Result<Self, QueueError> {
        match s {
            STATUS_PENDING => Ok(AppointStatus::Pending),
            STATUS_CONFIRMED => Ok(AppointStatus::Confirmed),
            STATUS_COMPLETED => Ok(AppointStatus::Completed),
            STATUS_CANCELLED => Ok(AppointStatus::Cancelled),
            _ => Err(QueueError::UnknownStatus(s.to_string())),
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, AppointStatus::Completed | AppointStatus::Cancelled)
    }

    pub fn can_transition_to(self, target: AppointStatus) -> bool {
        matches!(
            (self, target),
            (AppointStatus::Pending, AppointStatus::Confirmed)
                | (AppointStatus::Pending, AppointStatus::Cancelled)
                | (AppointStatus::Confirmed, AppointStatus::Completed)
                | (AppointStatus::Confirmed, AppointStatus::Cancelled)
        )
    }
}

impl fmt::Display for AppointStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for s in &[
            AppointStatus::Pending,
            AppointStatus::Confirmed,
            AppointStatus::Completed,
            AppointStatus::Cancelled,
        ] {
            assert_eq!(AppointStatus::parse(s.as_str()).unwrap(), *s);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        match AppointStatus::parse("NO_SHOW") {
            Err(QueueError::UnknownStatus(s)) => assert_eq!(s, "NO_SHOW"),
            other => panic!("expected UnknownStatus, got {:?}", other),
        }
    }

    #[test]
    fn pending_edges() {
        let from = AppointStatus::Pending;
        assert!(from.can_transition_to(AppointStatus::Confirmed));
        assert!(from.can_transition_to(AppointStatus::Cancelled));
        assert!(!from.can_transition_to(AppointStatus::Completed));
        assert!(!from.can_transition_to(AppointStatus::Pending));
    }

    #[test]
    fn confirmed_edges() {
        let from = AppointStatus::Confirmed;
        assert!(from.can_transition_to(AppointStatus::Completed));
        assert!(from.can_transition_to(AppointStatus::Cancelled));
        assert!(!from.can_transition_to(AppointStatus::Pending));
        assert!(!from.can_transition_to(AppointStatus::Confirmed));
    }

    #[test]
    fn terminal_states_have_no_edges() {
        for from in &[AppointStatus::Completed, AppointStatus::Cancelled] {
            assert!(from.is_terminal());
            for to in &[
                AppointStatus::Pending,
                AppointStatus::Confirmed,
                AppointStatus::Completed,
                AppointStatus::Cancelled,
            ] {
                assert!(!from.can_transition_to(*to));
            }
        }
    }
}
