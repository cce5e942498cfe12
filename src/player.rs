use super::*;

/// Bookkeeping shared by every strategy: current stake and remaining rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    stake: Chips,
    rounds: usize,
}

impl Bankroll {
    pub fn new(stake: Chips, rounds: usize) -> Self {
        Self { stake, rounds }
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    /// Takes a wager out of the stake at placement.
    pub fn debit(&mut self, amount: Chips) {
        self.stake -= amount;
    }
    /// Returns winnings to the stake at settlement.
    pub fn credit(&mut self, amount: Chips) {
        self.stake += amount;
    }
    /// One round played.
    pub fn tick(&mut self) {
        self.rounds = self.rounds.saturating_sub(1);
    }
    pub fn reset(&mut self, stake: Chips, rounds: usize) {
        self.stake = stake;
        self.rounds = rounds;
    }
    /// Enough stake for the table minimum and rounds left to play.
    pub fn active(&self, minimum: Chips) -> bool {
        self.stake >= minimum && self.rounds > 0
    }
}

impl Default for Bankroll {
    fn default() -> Self {
        Self::new(STAKE, DURATION)
    }
}

/// A betting system.
///
/// Every implementation debits its wager from the stake at the moment
/// it places a bet. Settlement through [`Player::win`] only ever adds the
/// returned amount back; [`Player::lose`] moves no money.
///
/// Implementations that override `win` must credit the bankroll
/// themselves.
pub trait Player {
    fn bankroll(&self) -> &Bankroll;
    fn bankroll_mut(&mut self) -> &mut Bankroll;
    /// Human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Put this round's bets on the table and debit them from the stake.
    fn place(&mut self, table: &mut Table) -> Result<(), RouletteError>;

    /// A bet paid off.
    fn win(&mut self, bet: &Bet) {
        self.bankroll_mut().credit(bet.win_amount());
    }
    /// A bet lost. The wager already left the stake.
    fn lose(&mut self, _: &Bet) {}
    /// Every outcome the last spin paid, regardless of what was bet.
    fn winners(&mut self, _: &Bin) {}
    /// Drop any betting progression back to its opening state.
    fn restart(&mut self) {}

    /// Whether to keep playing. Strategies that stop reset their own
    /// progression so the next session starts clean.
    fn playing(&mut self, table: &Table) -> bool {
        self.bankroll().active(table.minimum())
    }

    fn stake(&self) -> Chips {
        self.bankroll().stake()
    }
    fn rounds(&self) -> usize {
        self.bankroll().rounds()
    }
    /// Begin a session with a fresh stake and round budget.
    fn reset(&mut self, stake: Chips, rounds: usize) {
        self.bankroll_mut().reset(stake, rounds);
    }
}
