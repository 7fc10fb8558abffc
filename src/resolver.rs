//! Resolution seam between the selection core and the transport layer.
//!
//! A resolver runs one selection call and projects the result into its
//! boundary form. No algorithmic logic lives here; the transport layer
//! (HTTP route, serialization framing) sits entirely outside this crate and
//! only ever sees [`CompactSolution`] come back.

use crate::models::{CompactSolution, Contract};
use crate::selector::{ContractSelector, DefiniteSelector};
use crate::validation::{validate_contracts, ValidationError};

/// Selects the optimal contracts from a batch and compacts the result.
///
/// Runs the exact engine without validating the batch; callers that ingest
/// untrusted data should go through [`try_resolve_optimize_contracts`].
pub fn resolve_optimize_contracts(contracts: &[Contract]) -> CompactSolution {
    resolve_contracts_with(&DefiniteSelector::new(), contracts)
}

/// Runs `selector` over a batch and compacts the result.
pub fn resolve_contracts_with(
    selector: &dyn ContractSelector,
    contracts: &[Contract],
) -> CompactSolution {
    selector.select_contracts(contracts).to_compact()
}

/// Validates a batch, then selects and compacts.
///
/// The ingestion entry point: malformed batches (duplicate names,
/// non-positive durations, negative starts) are rejected with the full
/// list of problems instead of reaching the engine.
pub fn try_resolve_optimize_contracts(
    contracts: &[Contract],
) -> Result<CompactSolution, Vec<ValidationError>> {
    validate_contracts(contracts)?;
    Ok(resolve_optimize_contracts(contracts))
}
