use super::*;
use crate::*;

/// Waits for [`STREAK`] consecutive reds, then bets against the streak
/// with a [`Martingale`] on Black.
///
/// Relies on the [`Player::winners`] notification to see every spin,
/// including the rounds where it had nothing on the table.
#[derive(Debug, Clone)]
pub struct SevenReds {
    martingale: Martingale,
    reds: usize,
}

impl SevenReds {
    pub fn new() -> Self {
        Self {
            martingale: Martingale::new(),
            reds: STREAK,
        }
    }
    /// Reds still needed before betting resumes.
    pub fn reds(&self) -> usize {
        self.reds
    }
    pub fn martingale(&self) -> &Martingale {
        &self.martingale
    }
}

impl Default for SevenReds {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for SevenReds {
    fn bankroll(&self) -> &Bankroll {
        self.martingale.bankroll()
    }
    fn bankroll_mut(&mut self) -> &mut Bankroll {
        self.martingale.bankroll_mut()
    }
    fn name(&self) -> &'static str {
        "SevenReds"
    }
    fn place(&mut self, table: &mut Table) -> Result<(), RouletteError> {
        match self.reds {
            0 => self.martingale.place(table),
            _ => Ok(()),
        }
    }
    fn win(&mut self, bet: &Bet) {
        self.martingale.win(bet);
    }
    fn lose(&mut self, bet: &Bet) {
        self.martingale.lose(bet);
    }
    fn winners(&mut self, bin: &Bin) {
        self.reds = match bin.contains_name("Red") {
            true => self.reds.saturating_sub(1),
            false => STREAK,
        };
    }
    fn restart(&mut self) {
        self.martingale.restart();
        self.reds = STREAK;
    }
    fn playing(&mut self, table: &Table) -> bool {
        let playing = self.martingale.playing(table);
        if !playing {
            self.reds = STREAK;
        }
        playing
    }
}
