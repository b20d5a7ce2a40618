// src/exit.rs
//! Standardized process exit codes for `storelens`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum StoreExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, malformed JSON, config).
    Error = 1,
    /// Arguments or thresholds were rejected before any computation.
    InvalidInput = 2,
    /// An order referenced a missing client or product under the `fail` policy.
    DanglingReference = 3,
    /// Snapshot records failed field validation.
    ValidationFailed = 4,
}

impl StoreExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error bubbled up from a handler.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<StoreError>() {
            Some(StoreError::InvalidInput(_) | StoreError::FanoutExceeded { .. }) => {
                Self::InvalidInput
            }
            Some(StoreError::DanglingReference { .. }) => Self::DanglingReference,
            Some(StoreError::Validation(_)) => Self::ValidationFailed,
            _ => Self::Error,
        }
    }
}

impl Termination for StoreExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RefKind;

    #[test]
    fn codes_are_distinct() {
        let codes = [
            StoreExit::Success,
            StoreExit::Error,
            StoreExit::InvalidInput,
            StoreExit::DanglingReference,
            StoreExit::ValidationFailed,
        ]
        .map(StoreExit::code);
        for (i, a) in codes.iter().enumerate() {
            assert!(codes[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn dangling_error_maps_to_code_3() {
        let err = anyhow::Error::new(StoreError::DanglingReference {
            kind: RefKind::Client,
            id: 9,
            order_id: 1,
        });
        assert_eq!(StoreExit::from_error(&err), StoreExit::DanglingReference);
    }

    #[test]
    fn foreign_error_is_generic() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(StoreExit::from_error(&err), StoreExit::Error);
    }
}
