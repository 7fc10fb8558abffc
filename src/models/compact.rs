//! Compact solution model.
//!
//! The serialization-only projection of a [`Solution`](super::Solution):
//! total income plus contract names in chronological acceptance order.
//! This is the boundary output record handed to the transport layer; it
//! carries no query capability and is never mutated after creation.

use serde::{Deserialize, Serialize};

/// Boundary form of a solution: income plus ordered contract names.
///
/// Created exactly once, from a finalized [`Solution`](super::Solution),
/// at the resolver boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactSolution {
    /// Total income of the selected contracts.
    pub income: i64,
    /// Selected contract names, ascending by start time.
    pub path: Vec<String>,
}

impl CompactSolution {
    /// The empty projection (income 0, no contracts).
    pub fn empty() -> Self {
        Self {
            income: 0,
            path: Vec::new(),
        }
    }

    /// Whether this is the empty projection.
    pub fn is_empty(&self) -> bool {
        self.income == 0 && self.path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let c = CompactSolution::empty();
        assert!(c.is_empty());
        assert_eq!(c.income, 0);
        assert!(c.path.is_empty());
    }

    #[test]
    fn test_boundary_json_shape() {
        let c = CompactSolution {
            income: 9,
            path: vec!["A".into(), "C".into()],
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"income":9,"path":["A","C"]}"#);

        let back: CompactSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
