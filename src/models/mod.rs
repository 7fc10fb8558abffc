//! Contract-selection domain models.
//!
//! Core value types for posing and answering a selection problem:
//!
//! - [`Contract`] — immutable priced interval on the shared resource
//! - [`Solution`] — conflict-free contract subset plus total income
//! - [`CompactSolution`] — boundary projection (income + contract names)

mod compact;
mod contract;
mod solution;

pub use compact::CompactSolution;
pub use contract::Contract;
pub use solution::Solution;
