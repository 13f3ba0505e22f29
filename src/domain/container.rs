use std::fmt;

/// Whether a compose service currently has a running container.
///
/// Anything short of a clean "running" answer from the runtime is
/// `NotRunning`; see `services::StatusProber`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    NotRunning,
}

impl RunStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::NotRunning => write!(f, "NOT running"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_running() {
        assert!(RunStatus::Running.is_running());
        assert!(!RunStatus::NotRunning.is_running());
    }

    #[test]
    fn test_display() {
        assert_eq!(RunStatus::Running.to_string(), "running");
        assert_eq!(RunStatus::NotRunning.to_string(), "NOT running");
    }
}
