use super::*;

/// The bets active for the current round, plus the house's betting rules.
///
/// Placement never fails. Rules are checked on demand by
/// [`Table::validate`], walking bets in placement order.
#[derive(Debug, Clone)]
pub struct Table {
    bets: Vec<Bet>,
    minimum: Chips,
    limit: Chips,
}

impl Table {
    pub fn new(minimum: Chips, limit: Chips) -> Self {
        Self {
            bets: Vec::new(),
            minimum,
            limit,
        }
    }
    /// Smallest legal single bet.
    pub fn minimum(&self) -> Chips {
        self.minimum
    }
    /// Largest legal sum of bets in one round.
    pub fn limit(&self) -> Chips {
        self.limit
    }
    pub fn place(&mut self, bet: Bet) {
        log::trace!("placed {}", bet);
        self.bets.push(bet);
    }
    /// Fails on the first bet below the minimum, or the first bet that
    /// pushes the running total past the limit.
    pub fn validate(&self) -> Result<(), RouletteError> {
        let mut total = 0;
        for bet in self.bets.iter() {
            total += bet.amount();
            if bet.amount() < self.minimum || total > self.limit {
                return Err(RouletteError::TableLimit {
                    amount: bet.amount(),
                    total,
                    minimum: self.minimum,
                    limit: self.limit,
                });
            }
        }
        Ok(())
    }
    pub fn clear(&mut self) {
        self.bets.clear();
    }
    pub fn len(&self) -> usize {
        self.bets.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Bet> {
        self.bets.iter()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(MINIMUM, LIMIT)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Bet;
    type IntoIter = std::slice::Iter<'a, Bet>;
    fn into_iter(self) -> Self::IntoIter {
        self.bets.iter()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.bets.is_empty() {
            return write!(f, "no bets");
        }
        for (i, bet) in self.bets.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", bet)?;
        }
        Ok(())
    }
}
