//! Claims
//!
//! Tracks which items of which group have already been priced while a basket
//! total is being computed, so that no item is charged twice.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::strategies::StrategyKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Claim {
    kind: StrategyKind,
    count: usize,
}

/// Registry of claimed item names for a single pricing pass.
///
/// A name is claimed by the first strategy that prices any of its items.
/// Claims are always a prefix of the group: the first `count` items.
#[derive(Clone, Debug, Default)]
pub struct Claims {
    claims: FxHashMap<String, Claim>,
}

impl Claims {
    /// Create an empty claims registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any strategy has priced items of this group.
    pub fn is_claimed(&self, name: &str) -> bool {
        self.claims.contains_key(name)
    }

    /// Number of leading items of the group that have been priced.
    pub fn claimed_count(&self, name: &str) -> usize {
        self.claims.get(name).map_or(0, |claim| claim.count)
    }

    /// The strategy that first claimed the group, if any.
    pub fn claimant(&self, name: &str) -> Option<StrategyKind> {
        self.claims.get(name).map(|claim| claim.kind)
    }

    /// Mark the next `count` items of the group as priced by `kind`.
    pub fn claim(&mut self, name: &str, kind: StrategyKind, count: usize) {
        trace!(name, %kind, count, "claiming items");

        self.claims
            .entry(name.to_string())
            .and_modify(|claim| claim.count += count)
            .or_insert(Claim { kind, count });
    }

    /// Number of claimed groups.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether nothing has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclaimed_names_report_nothing() {
        let claims = Claims::new();

        assert!(!claims.is_claimed("Yogurt"));
        assert_eq!(claims.claimed_count("Yogurt"), 0);
        assert_eq!(claims.claimant("Yogurt"), None);
        assert!(claims.is_empty());
    }

    #[test]
    fn later_claims_extend_the_count_but_keep_the_first_claimant() {
        let mut claims = Claims::new();

        claims.claim("Yogurt", StrategyKind::Weighted, 2);
        claims.claim("Yogurt", StrategyKind::Simple, 1);

        assert!(claims.is_claimed("Yogurt"));
        assert_eq!(claims.claimed_count("Yogurt"), 3);
        assert_eq!(claims.claimant("Yogurt"), Some(StrategyKind::Weighted));
        assert_eq!(claims.len(), 1);
    }
}
