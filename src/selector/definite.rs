//! Exact contract selection via bottom-up dynamic programming.
//!
//! # Algorithm
//!
//! 1. Prune dominated contracts ([`crate::pruning`]).
//! 2. Build the event-time frontier: the sorted distinct start times plus
//!    the horizon (latest contract end).
//! 3. Walk contracts in `(start, duration)` order, improving the best-known
//!    solution at each contract's end time and broadcasting every
//!    improvement forward across the frontier.
//!
//! # Complexity
//! O(N log N) pruning and sorting, O(T·N) for the broadcast loop where T is
//! the number of distinct event times (≤ N + 1). O(N) space for the table.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 6.1

use std::collections::HashMap;

use crate::models::{Contract, Solution};
use crate::pruning::prune_contracts;

use super::ContractSelector;

/// The exact selector: computes the globally optimal solution.
///
/// Expensive next to heuristic strategies (worst case O(T·N) with a table
/// of cloned solutions), but its answer is the optimum, which makes it the
/// oracle any approximate [`ContractSelector`] is judged against.
///
/// The table maps event time → best solution achievable once the resource
/// has processed everything up to that time; times with no entry hold the
/// empty solution implicitly. A sparse map is used rather than a dense
/// array because contract times can sit far apart.
///
/// # Recurrence
///
/// A contract is only acceptable at its literal start time, so
/// `best(end) = max(best(end), best(start) + price)`. A solution improved
/// at one time stays available at every later time (nothing forces the
/// resource's use), which is why each improvement is broadcast to all later
/// frontier times; without the broadcast, profit is under-counted whenever
/// an improved solution's end does not coincide with a later start.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefiniteSelector;

impl DefiniteSelector {
    /// Creates a new exact selector.
    pub fn new() -> Self {
        Self
    }
}

impl ContractSelector for DefiniteSelector {
    fn name(&self) -> &'static str {
        "definite"
    }

    fn select_contracts(&self, contracts: &[Contract]) -> Solution {
        if contracts.is_empty() {
            return Solution::empty();
        }

        // Sorted ascending by (start, duration).
        let pruned = prune_contracts(contracts);
        let horizon = match pruned.iter().map(Contract::end).max() {
            Some(horizon) => horizon,
            None => return Solution::empty(),
        };

        // Distinct start times, ascending, with the horizon appended.
        // Every start precedes the horizon since durations are positive.
        let mut frontier: Vec<i64> = pruned.iter().map(|c| c.start).collect();
        frontier.dedup();
        frontier.push(horizon);

        let mut table: HashMap<i64, Solution> = HashMap::new();

        for contract in &pruned {
            let end = contract.end();
            let income_at_start = table.get(&contract.start).map_or(0, |s| s.income);
            let candidate_income = income_at_start + contract.price;
            let income_at_end = table.get(&end).map_or(0, |s| s.income);

            // Strict improvement only: on a tie the earliest-found solution
            // stays, keeping the winner deterministic.
            if candidate_income <= income_at_end {
                continue;
            }

            let improved = match table.get(&contract.start) {
                Some(base) => base.add_contract(contract.clone()),
                None => Solution::empty().add_contract(contract.clone()),
            };

            // Broadcast forward: every frontier time strictly after `end`
            // that holds less income takes an independent clone. Slots never
            // share one solution, so a later extension of one slot cannot
            // corrupt another.
            let first_after = frontier.partition_point(|&t| t <= end);
            for &time in &frontier[first_after..] {
                if table.get(&time).map_or(0, |s| s.income) < improved.income {
                    table.insert(time, improved.clone());
                }
            }
            table.insert(end, improved);
        }

        let best = table.remove(&horizon).unwrap_or_else(Solution::empty);

        tracing::debug!(
            contracts = pruned.len(),
            event_times = frontier.len(),
            income = best.income,
            "definite selection complete"
        );

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(name: &str, start: i64, duration: i64, price: i64) -> Contract {
        Contract::new(name, start, duration, price)
    }

    fn select(contracts: &[Contract]) -> Solution {
        DefiniteSelector::new().select_contracts(contracts)
    }

    fn path_names(solution: &Solution) -> Vec<&str> {
        solution.path.values().map(|c| c.name.as_str()).collect()
    }

    /// Income must equal the sum of prices, and no two contracts may overlap.
    fn assert_solution_invariants(solution: &Solution) {
        let total: i64 = solution.path.values().map(|c| c.price).sum();
        assert_eq!(solution.income, total);

        let contracts: Vec<&Contract> = solution.path.values().collect();
        for (i, a) in contracts.iter().enumerate() {
            for &b in &contracts[i + 1..] {
                assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_empty_batch() {
        let solution = select(&[]);
        assert!(solution.is_empty());
    }

    #[test]
    fn test_single_contract() {
        let solution = select(&[contract("Only", 2, 3, 7)]);
        assert_eq!(solution.income, 7);
        assert_eq!(path_names(&solution), vec!["Only"]);
    }

    #[test]
    fn test_back_to_back_chain_takes_both() {
        let solution = select(&[contract("A", 0, 1, 10), contract("B", 1, 1, 20)]);
        assert_eq!(solution.income, 30);
        assert_eq!(path_names(&solution), vec!["A", "B"]);
        assert_solution_invariants(&solution);
    }

    #[test]
    fn test_chain_beats_single_rich_contract() {
        // A then C yields 9; B alone yields 6.
        let batch = vec![
            contract("A", 0, 3, 5),
            contract("B", 0, 4, 6),
            contract("C", 3, 2, 4),
        ];
        let solution = select(&batch);
        assert_eq!(solution.income, 9);
        assert_eq!(path_names(&solution), vec!["A", "C"]);
        assert_solution_invariants(&solution);
    }

    #[test]
    fn test_same_start_overlap_picks_higher_price() {
        let solution = select(&[contract("X", 0, 5, 3), contract("Y", 0, 5, 8)]);
        assert_eq!(solution.income, 8);
        assert_eq!(path_names(&solution), vec!["Y"]);
    }

    #[test]
    fn test_improvement_propagates_across_gap() {
        // A ends at 5, B starts at 7: no contract start coincides with A's
        // end, so A's profit must reach B's start through the frontier.
        let solution = select(&[contract("A", 0, 5, 10), contract("B", 7, 2, 1)]);
        assert_eq!(solution.income, 11);
        assert_eq!(path_names(&solution), vec!["A", "B"]);
    }

    #[test]
    fn test_cheap_chain_beats_rich_blocker() {
        // Taking A (price 3) frees time 2 for C; skipping A for B loses out.
        let batch = vec![
            contract("A", 0, 2, 3),
            contract("B", 0, 5, 5),
            contract("C", 2, 3, 4),
        ];
        let solution = select(&batch);
        assert_eq!(solution.income, 7);
        assert_eq!(path_names(&solution), vec!["A", "C"]);
    }

    #[test]
    fn test_tie_keeps_earliest_found_solution() {
        // C alone equals A + B in income; C's solution is found first and a
        // tie never rewrites the table.
        let batch = vec![
            contract("A", 0, 2, 5),
            contract("C", 0, 4, 10),
            contract("B", 2, 2, 5),
        ];
        let solution = select(&batch);
        assert_eq!(solution.income, 10);
        assert_eq!(path_names(&solution), vec!["C"]);
    }

    #[test]
    fn test_lossy_contract_never_taken_alone() {
        let solution = select(&[contract("Loss", 0, 1, -5)]);
        assert!(solution.is_empty());
    }

    #[test]
    fn test_pruning_preserves_optimal_income() {
        let batch = vec![
            contract("A", 0, 3, 5),
            contract("B", 0, 3, 2),
            contract("C", 0, 5, 5),
            contract("D", 3, 2, 4),
            contract("E", 3, 4, 4),
            contract("F", 5, 1, 2),
        ];
        let full = select(&batch);
        let pre_pruned = select(&crate::pruning::prune_contracts(&batch));
        assert_eq!(full.income, pre_pruned.income);
    }

    #[test]
    fn test_dense_batch_invariants() {
        let batch = vec![
            contract("A", 0, 4, 3),
            contract("B", 2, 2, 6),
            contract("C", 4, 3, 5),
            contract("D", 4, 1, 2),
            contract("E", 5, 2, 9),
            contract("F", 7, 1, 1),
            contract("G", 1, 9, 12),
        ];
        let solution = select(&batch);
        assert_solution_invariants(&solution);
        // B(2..4) + D(4..5) + E(5..7) + F(7..8) = 18 beats G's 12.
        assert_eq!(solution.income, 18);
        assert_eq!(path_names(&solution), vec!["B", "D", "E", "F"]);
    }
}
