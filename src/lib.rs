//! Exact contract selection for a single shared resource.
//!
//! Given a batch of contracts, each with a name, a start time, a duration,
//! and a price, select the subset maximizing total income, subject to two
//! constraints: a contract can only be accepted exactly at its declared
//! start time, and the resource executes at most one contract at a time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Contract`](models::Contract),
//!   [`Solution`](models::Solution),
//!   [`CompactSolution`](models::CompactSolution)
//! - **`validation`**: Batch integrity checks (duplicate names, bad
//!   durations, negative starts)
//! - **`pruning`**: Dominance pruning pass run before selection
//! - **`selector`**: The [`ContractSelector`](selector::ContractSelector)
//!   capability and the exact DP engine
//! - **`resolver`**: Call-and-project seam for the transport layer
//!
//! # Architecture
//!
//! The computation is single-threaded and run-to-completion; a selection
//! call builds its own state from scratch and no state survives between
//! calls. Contracts are immutable values shared by cloning; solutions are
//! never aliased, and every propagation inside the engine stores an
//! independent copy.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 6.1
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod pruning;
pub mod resolver;
pub mod selector;
pub mod validation;
