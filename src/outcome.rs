use super::*;
use std::cmp::Ordering;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

/// A named wager with fixed payout odds.
///
/// Identity is the name alone. Odds ride along as metadata, so two
/// outcomes built separately with the same name compare and hash equal
/// even if their odds disagree. Names are assumed globally unique with a
/// single canonical payout. Only integer `N:1` payouts are representable.
#[derive(Debug, Clone)]
pub struct Outcome {
    name: Arc<str>,
    odds: Odds,
}

impl Outcome {
    pub fn new(name: &str, odds: Odds) -> Self {
        Self {
            name: Arc::from(name),
            odds,
        }
    }
    /// A 1:1 outcome such as Red or Black.
    pub fn even(name: &str) -> Self {
        Self::new(name, 1)
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn odds(&self) -> Odds {
        self.odds
    }
    /// Payout on a winning wager, excluding the wager itself.
    pub fn win_amount(&self, amount: f64) -> f64 {
        self.odds as f64 * amount
    }
}

impl Eq for Outcome {}
impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Outcome {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({}:1)", self.name, self.odds)
    }
}
