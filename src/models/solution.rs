//! Solution model.
//!
//! A solution is a conflict-free subset of contracts plus its total income.
//! Contracts are stored in an ordered map keyed by start time, because the
//! selection algorithms lean on ordered neighbor queries: overlap probes
//! look at the predecessor and successor of a candidate start, and the
//! compact projection walks the path in chronological order.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{CompactSolution, Contract};

/// A conflict-free set of accepted contracts and their total income.
///
/// Mutable while a selector builds it, value-like once returned. A solution
/// always owns its path outright: propagating one across table slots clones it,
/// so no two slots ever share a mutable path.
///
/// # Invariants
/// - No two contracts in `path` overlap on `[start, start + duration)`.
/// - `income` equals the sum of `price` over `path`'s values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Solution {
    /// Total income: sum of prices of the contracts in `path`.
    pub income: i64,
    /// Accepted contracts, keyed by start time (ascending).
    pub path: BTreeMap<i64, Contract>,
}

impl Solution {
    /// Creates the empty solution (income 0, no contracts).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is the empty solution.
    pub fn is_empty(&self) -> bool {
        self.income == 0 && self.path.is_empty()
    }

    /// Checks whether `contract`'s interval overlaps any contract in the path.
    ///
    /// Only two neighbors can conflict: the contract starting at or before
    /// the candidate (it may run past the candidate's start) and the first
    /// contract starting at or after it (the candidate may run past its
    /// start). Both are ordered-map range probes, O(log N).
    pub fn has_overlap(&self, contract: &Contract) -> bool {
        if let Some((_, previous)) = self.path.range(..contract.start).next_back() {
            if previous.end() > contract.start {
                return true;
            }
        }
        if let Some((_, next)) = self.path.range(contract.start..).next() {
            if contract.end() > next.start {
                return true;
            }
        }
        false
    }

    /// Returns a new solution extended by `contract`.
    ///
    /// The receiver is left untouched: the path is cloned wholesale so the
    /// returned solution never shares storage with the original.
    ///
    /// # Panics
    /// Panics if a contract already occupies `contract.start`. The selector
    /// only extends solutions whose paths are free at that time, so a
    /// collision here is a bookkeeping defect, not bad input.
    pub fn add_contract(&self, contract: Contract) -> Solution {
        if let Some(occupant) = self.path.get(&contract.start) {
            panic!(
                "start slot {} already occupied by {:?} while adding {:?}",
                contract.start, occupant, contract
            );
        }
        let mut extended = self.clone();
        extended.income += contract.price;
        extended.path.insert(contract.start, contract);
        extended
    }

    /// Removes the contract at `contract.start`, adjusting income by the
    /// removed occupant's price. No-op when that start time is vacant.
    ///
    /// Used by local-search style strategies that evict a contract to escape
    /// a local optimum; the exact selector never removes.
    pub fn remove_contract(&mut self, contract: &Contract) {
        if let Some(removed) = self.path.remove(&contract.start) {
            self.income -= removed.price;
        }
    }

    /// Picks a uniformly random contract from the path, if any.
    pub fn choose_random_contract(&self, rng: &mut impl Rng) -> Option<&Contract> {
        if self.path.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.path.len());
        self.path.values().nth(index)
    }

    /// Projects this solution into its boundary form: income plus contract
    /// names in ascending start order.
    pub fn to_compact(&self) -> CompactSolution {
        CompactSolution {
            income: self.income,
            path: self.path.values().map(|c| c.name.clone()).collect(),
        }
    }
}
