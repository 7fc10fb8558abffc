//! Dominance pruning for contract batches.
//!
//! Removes contracts that can never appear in an optimal solution before the
//! selection engine runs, shrinking N without changing the optimal income.
//! A contract is dominated when another contract at the same start time
//! offers equal-or-greater profit for equal-or-shorter duration.
//!
//! # Complexity
//! O(N log N) sort plus O(N log N) grouped insertion; O(N) space when no
//! contract can be pruned (all start×duration pairs unique).
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 6.1 (Weighted Interval
//! Scheduling)

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::models::Contract;

/// Whether `incumbent` dominates `candidate`.
///
/// Both must share a start time; the incumbent then dominates when it runs
/// no longer and pays no less, so taking the candidate instead could never
/// improve any solution.
pub fn dominates(incumbent: &Contract, candidate: &Contract) -> bool {
    incumbent.start == candidate.start
        && incumbent.duration <= candidate.duration
        && incumbent.price >= candidate.price
}

/// Prunes dominated contracts from a batch.
///
/// Returns the surviving contracts sorted ascending by `(start, duration)`,
/// with at most one contract per start×duration pair (the highest-priced
/// one). The optimal achievable income over the returned set equals that of
/// the input set.
///
/// # Algorithm
/// 1. Sort by `(start asc, duration asc, price desc)`, so that per start
///    time, shorter contracts arrive first and the best-priced contract of
///    each duration arrives before its ties.
/// 2. Group survivors per start time in a duration-keyed ordered map. For
///    each contract: replace a same-duration survivor only on strictly
///    greater price; otherwise probe the next-shorter-duration survivor and
///    discard the contract if that neighbor dominates it.
/// 3. Flatten the groups in `(start, duration)` order.
///
/// Processing in ascending duration order means survivors within a group
/// hold strictly increasing prices, so the single next-shorter neighbor is
/// the only dominance witness that needs checking.
pub fn prune_contracts(contracts: &[Contract]) -> Vec<Contract> {
    let mut sorted: Vec<Contract> = contracts.to_vec();
    sorted.sort_by_key(|c| (c.start, c.duration, Reverse(c.price)));

    let mut groups: BTreeMap<i64, BTreeMap<i64, Contract>> = BTreeMap::new();

    for contract in sorted {
        let group = groups.entry(contract.start).or_default();
        match group.get(&contract.duration).map(|existing| existing.price) {
            Some(existing_price) => {
                if contract.price > existing_price {
                    group.insert(contract.duration, contract);
                }
            }
            None => {
                let dominated = group
                    .range(..contract.duration)
                    .next_back()
                    .is_some_and(|(_, shorter)| dominates(shorter, &contract));
                if !dominated {
                    group.insert(contract.duration, contract);
                }
            }
        }
    }

    let pruned: Vec<Contract> = groups
        .into_values()
        .flat_map(BTreeMap::into_values)
        .collect();

    tracing::debug!(
        input = contracts.len(),
        kept = pruned.len(),
        "dominance pruning complete"
    );

    pruned
}
