//! Contract model.
//!
//! A contract is a priced, time-bound task occupying the single shared
//! resource for the half-open interval `[start, start + duration)`.
//! A contract can only be accepted exactly at its declared start time.

use serde::{Deserialize, Serialize};

/// A time-bound, priced contract.
///
/// Plain immutable value with structural equality and hashing, so it can be
/// shared across candidate solutions by cloning without ownership conflicts.
///
/// # Time Representation
/// All times are integer units relative to a scheduling epoch (t=0).
/// The consumer defines what one unit means (e.g., an hour).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    /// Unique contract identifier.
    pub name: String,
    /// Start time (units, >= 0). The only time at which the contract can be accepted.
    pub start: i64,
    /// Occupied duration (units, > 0).
    pub duration: i64,
    /// Profit for taking the contract. May be any sign.
    pub price: i64,
}

impl Contract {
    /// Creates a new contract.
    pub fn new(name: impl Into<String>, start: i64, duration: i64, price: i64) -> Self {
        Self {
            name: name.into(),
            start,
            duration,
            price,
        }
    }

    /// End time (exclusive): `start + duration`.
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }

    /// Whether this contract's occupied interval overlaps `other`'s.
    ///
    /// Intervals are half-open, so back-to-back contracts do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Contract) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}
