use super::*;
use std::collections::BTreeSet;

/// The outcomes that pay off when the ball lands on one number.
///
/// Ordered by outcome name so iteration and display are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bin(BTreeSet<Outcome>);

impl Bin {
    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.0.contains(outcome)
    }
    /// Outcome identity is the name, so odds are irrelevant to the lookup.
    pub fn contains_name(&self, name: &str) -> bool {
        self.0.contains(&Outcome::new(name, 0))
    }
    pub fn insert(&mut self, outcome: Outcome) {
        self.0.insert(outcome);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.0.iter()
    }
}

impl FromIterator<Outcome> for Bin {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Bin {
    type Item = &'a Outcome;
    type IntoIter = std::collections::btree_set::Iter<'a, Outcome>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Bin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = self.iter().map(Outcome::name).collect::<Vec<_>>();
        write!(f, "[{}]", names.join(", "))
    }
}
