// src/exit.rs
//! Standardized process exit codes for `resurrect`.
//!
//! Provides a stable contract for scripts and CI pipelines.

use std::process::Termination;

use crate::error::ResurrectError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ResurrectExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input validation failed (empty project, oversized diff, bad arguments).
    InvalidInput = 2,
    /// Analysis status reached the `--fail-on` threshold.
    CheckFailed = 6,
}

impl ResurrectExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit code for a failed command: validation failures get
    /// `InvalidInput`, everything else `Error`.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ResurrectError>() {
            Some(ResurrectError::InvalidInput(_) | ResurrectError::InputTooLarge { .. }) => {
                Self::InvalidInput
            }
            _ => Self::Error,
        }
    }
}

impl Termination for ResurrectExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
