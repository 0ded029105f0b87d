//! Errors raised by the polynomial algebra.

use geoprove_core::ProverError;
use thiserror::Error;

/// Errors raised by polynomial arithmetic and division.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Two powers of different variables cannot be multiplied into one.
    #[error("cannot combine powers of {left} and {right}")]
    PowerMismatch {
        /// Variable of the receiver.
        left: String,
        /// Variable of the argument.
        right: String,
    },

    /// Two terms with different monomials cannot be merged.
    #[error("cannot merge terms {left} and {right}")]
    MonomialMismatch {
        /// Monomial of the receiver.
        left: String,
        /// Monomial of the argument.
        right: String,
    },

    /// Division by the zero polynomial.
    #[error("division by the zero polynomial")]
    ZeroDivisor,

    /// A pseudo-division step failed to lower the degree.
    #[error("degenerate leading coefficient while eliminating {variable}")]
    DegenerateLeadingCoefficient {
        /// Display form of the variable being eliminated.
        variable: String,
    },

    /// The worker pool could not be created.
    #[error("cannot build worker pool: {0}")]
    ThreadPool(String),
}

impl From<PolyError> for ProverError {
    fn from(err: PolyError) -> Self {
        match err {
            PolyError::DegenerateLeadingCoefficient { variable } => {
                ProverError::DegenerateLeadingCoefficient { variable }
            }
            other => ProverError::General(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use geoprove_core::ResultCode;

    use super::*;

    #[test]
    fn test_conversion_keeps_degenerate_variant() {
        let err: ProverError = PolyError::DegenerateLeadingCoefficient {
            variable: "x3".to_string(),
        }
        .into();
        assert!(matches!(err, ProverError::DegenerateLeadingCoefficient { .. }));
        assert_eq!(err.code(), ResultCode::General);
    }

    #[test]
    fn test_conversion_of_contract_errors() {
        let err: ProverError = PolyError::ZeroDivisor.into();
        assert_eq!(err, ProverError::General("division by the zero polynomial".to_string()));
    }
}
