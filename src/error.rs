//! Error types: recoverable user input errors vs internal defects.

use thiserror::Error;

/// Errors surfaced by the wizard.
///
/// `Input` is the only user-visible failure surface: bad typed input or a
/// failed finish validation. The configurator guarantees that when an `Input`
/// error is returned, the config and navigation history are exactly as they
/// were before the failed call, so the user may simply resubmit.
///
/// `Internal` means the menu tree and the dispatch logic disagree (for
/// example an input setter invoked on a page of a different kind). That is a
/// defect, not something the user can correct; callers should not re-prompt.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("{0}")]
    Input(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl WizardError {
    /// True for recoverable errors whose message is meant for the end user.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

#[cfg(test)]
mod tests {
    use super::WizardError;

    #[test]
    fn input_errors_display_bare_message() {
        let err = WizardError::Input("bad value".to_string());
        assert_eq!(err.to_string(), "bad value");
        assert!(err.is_user_error());
    }

    #[test]
    fn internal_errors_are_flagged() {
        let err = WizardError::Internal("page kind mismatch".to_string());
        assert_eq!(err.to_string(), "internal error: page kind mismatch");
        assert!(!err.is_user_error());
    }
}
