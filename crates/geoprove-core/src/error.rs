//! Error taxonomy shared by every prover phase.

use std::fmt;

use thiserror::Error;

use crate::budget::Phase;

/// Errors that terminate a proof attempt.
///
/// Space and time exhaustion are the expected failure modes on large
/// problems; the others indicate bad input or a broken invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProverError {
    /// A contract violation inside the algebra (bad argument, failed division).
    #[error("general failure: {0}")]
    General(String),

    /// Pseudo-division could not lower the degree of the dividend.
    #[error("degenerate leading coefficient while eliminating {variable}")]
    DegenerateLeadingCoefficient {
        /// Display form of the variable being eliminated.
        variable: String,
    },

    /// An intermediate polynomial outgrew the configured term limit.
    #[error("{phase}: polynomial reached {terms} terms, limit is {limit}")]
    SpaceLimit {
        /// Phase in which the limit was hit.
        phase: Phase,
        /// Size of the offending polynomial.
        terms: usize,
        /// Configured limit.
        limit: usize,
    },

    /// A phase ran past its deadline.
    #[error("{phase}: ran {elapsed_ms} ms, limit is {limit_ms} ms")]
    TimeLimit {
        /// Phase that timed out.
        phase: Phase,
        /// Wall-clock time spent in the phase.
        elapsed_ms: u128,
        /// Configured limit.
        limit_ms: u128,
    },

    /// A required input was missing.
    #[error("missing input: {0}")]
    Null(String),

    /// The requested method cannot handle a construction or statement.
    #[error("unsupported by {method}: {what}")]
    Unsupported {
        /// Name of the proving method.
        method: &'static str,
        /// What could not be handled.
        what: String,
    },
}

impl ProverError {
    /// Maps the error onto the driver-level result code.
    #[must_use]
    pub fn code(&self) -> ResultCode {
        match self {
            ProverError::General(_)
            | ProverError::DegenerateLeadingCoefficient { .. }
            | ProverError::Unsupported { .. } => ResultCode::General,
            ProverError::SpaceLimit { .. } => ResultCode::Space,
            ProverError::TimeLimit { .. } => ResultCode::Time,
            ProverError::Null(_) => ResultCode::Null,
        }
    }

    /// Returns true for the resource-exhaustion errors a user can act on
    /// by raising a limit.
    #[must_use]
    pub fn is_resource_limit(&self) -> bool {
        matches!(
            self,
            ProverError::SpaceLimit { .. } | ProverError::TimeLimit { .. }
        )
    }
}

/// Driver-level outcome codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// The phase completed.
    Success,
    /// Contract violation or failed pseudo-division.
    General,
    /// Term-count limit exceeded.
    Space,
    /// Deadline exceeded.
    Time,
    /// Missing required input.
    Null,
}

impl ResultCode {
    /// Returns the code for a phase result.
    pub fn of<T>(result: &Result<T, ProverError>) -> Self {
        match result {
            Ok(_) => ResultCode::Success,
            Err(e) => e.code(),
        }
    }

    /// Returns the conventional name of the code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ResultCode::Success => "SUCCESS",
            ResultCode::General => "ERR_CODE_GENERAL",
            ResultCode::Space => "ERR_CODE_SPACE",
            ResultCode::Time => "ERR_CODE_TIME",
            ResultCode::Null => "ERR_CODE_NULL",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
