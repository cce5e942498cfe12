use crate::*;

/// Climbs the Fibonacci sequence on Black after each loss and drops back
/// to the start on a win, betting 1, 1, 2, 3, 5, ...
#[derive(Debug, Clone)]
pub struct Fibonacci {
    bankroll: Bankroll,
    outcome: Outcome,
    recent: Chips,
    previous: Chips,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self::from(Outcome::even("Black"))
    }
    pub fn recent(&self) -> Chips {
        self.recent
    }
    pub fn previous(&self) -> Chips {
        self.previous
    }
    /// Next bet: the most recent term of the sequence.
    pub fn amount(&self) -> Chips {
        self.recent
    }
}

impl From<Outcome> for Fibonacci {
    fn from(outcome: Outcome) -> Self {
        Self {
            bankroll: Bankroll::default(),
            outcome,
            recent: 1,
            previous: 0,
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for Fibonacci {
    fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }
    fn name(&self) -> &'static str {
        "Fibonacci"
    }
    fn place(&mut self, table: &mut Table) -> Result<(), RouletteError> {
        let amount = self.amount();
        table.place(Bet::new(amount, self.outcome.clone()));
        self.bankroll.debit(amount);
        Ok(())
    }
    fn win(&mut self, bet: &Bet) {
        self.bankroll.credit(bet.win_amount());
        self.restart();
    }
    fn lose(&mut self, _: &Bet) {
        let next = self.recent + self.previous;
        self.previous = self.recent;
        self.recent = next;
    }
    fn restart(&mut self) {
        self.recent = 1;
        self.previous = 0;
    }
    fn playing(&mut self, table: &Table) -> bool {
        if self.bankroll.active(table.minimum()) && self.bankroll.stake() >= self.amount() {
            true
        } else {
            self.restart();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black(amount: Chips) -> Bet {
        Bet::new(amount, Outcome::even("Black"))
    }

    #[test]
    fn losses_follow_the_recurrence() {
        let ref mut player = Fibonacci::new();
        assert_eq!((player.recent(), player.previous()), (1, 0));
        player.lose(&black(1));
        assert_eq!((player.recent(), player.previous()), (1, 1));
        assert_eq!(player.amount(), 1);
        player.lose(&black(1));
        assert_eq!((player.recent(), player.previous()), (2, 1));
        player.lose(&black(2));
        player.lose(&black(3));
        assert_eq!(player.amount(), 5);
    }

    #[test]
    fn win_resets_sequence() {
        let ref mut player = Fibonacci::new();
        player.lose(&black(1));
        player.lose(&black(1));
        player.win(&black(2));
        assert_eq!((player.recent(), player.previous()), (1, 0));
        assert_eq!(player.stake(), STAKE + 4);
    }

    #[test]
    fn placement_bets_recent_term() {
        let ref mut table = Table::default();
        let ref mut player = Fibonacci::new();
        player.lose(&black(1));
        player.lose(&black(1));
        player.place(table).unwrap();
        assert_eq!(table.iter().next().map(Bet::amount), Some(2));
        assert_eq!(player.stake(), STAKE - 2);
    }

    #[test]
    fn stops_when_stake_cannot_cover_bet() {
        let ref table = Table::default();
        let ref mut player = Fibonacci::new();
        for _ in 0..5 {
            player.lose(&black(1));
        }
        player.reset(5, 10);
        assert_eq!(player.amount(), 8);
        assert!(!player.playing(table));
        assert_eq!(player.amount(), 1);
    }
}
