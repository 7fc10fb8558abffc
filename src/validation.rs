//! Input validation for contract batches.
//!
//! Checks structural integrity of a batch before selection. Detects:
//! - Duplicate contract names
//! - Non-positive durations
//! - Negative start times
//!
//! The selection engine itself never validates (its correctness argument
//! assumes positive durations), so ingestion is expected to reject a batch
//! that fails these checks before resolving it. Prices of any sign pass:
//! a negative price models a lossy contract, which the engine simply never
//! selects on its own.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Contract;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two contracts share the same name.
    DuplicateName,
    /// A contract's duration is zero or negative.
    NonPositiveDuration,
    /// A contract starts before the scheduling epoch.
    NegativeStart,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a contract batch.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_contracts(contracts: &[Contract]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for contract in contracts {
        if !names.insert(contract.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate contract name: {}", contract.name),
            ));
        }

        if contract.duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Contract '{}' has non-positive duration {}",
                    contract.name, contract.duration
                ),
            ));
        }

        if contract.start < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeStart,
                format!(
                    "Contract '{}' starts at {} before the epoch",
                    contract.name, contract.start
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
