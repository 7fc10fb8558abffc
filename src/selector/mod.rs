//! Contract selection strategies.
//!
//! Defines the selection capability and its exact implementation.
//!
//! We are choosing from a batch of contracts for a single shared resource
//! under two constraints: a contract can only be taken exactly at its start
//! time, and the resource executes at most one contract at a time. The
//! objective is maximum total income.
//!
//! # Usage
//!
//! ```
//! use contract_select::models::Contract;
//! use contract_select::selector::{ContractSelector, DefiniteSelector};
//!
//! let contracts = vec![
//!     Contract::new("A", 0, 1, 10),
//!     Contract::new("B", 1, 1, 20),
//! ];
//! let solution = DefiniteSelector::new().select_contracts(&contracts);
//! assert_eq!(solution.income, 30);
//! ```
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 6.1

mod definite;

pub use definite::DefiniteSelector;

use std::fmt::Debug;

use crate::models::{Contract, Solution};

/// A strategy for selecting contracts from a batch.
///
/// Implementations must return a [`Solution`] whose path is conflict-free
/// and whose income equals the sum of its contracts' prices. The exact
/// engine ([`DefiniteSelector`]) guarantees the global optimum; approximate
/// strategies (greedy, beam search, local search) would implement the same
/// capability and be substitutable at this seam.
pub trait ContractSelector: Send + Sync + Debug {
    /// Strategy name (e.g., "definite").
    fn name(&self) -> &'static str;

    /// Selects a maximum-income, non-overlapping subset of `contracts`.
    ///
    /// Returns the empty solution for an empty batch.
    fn select_contracts(&self, contracts: &[Contract]) -> Solution;
}
