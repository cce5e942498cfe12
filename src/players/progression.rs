use crate::*;

/// How a bet settled, from the bettor's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Win,
    Lose,
}

/// State of the 1-3-2-6 system: how many wins in a row so far.
///
/// Wins walk `NoWins → OneWin → TwoWins → ThreeWins → NoWins`, betting
/// 1, 3, 2, 6 units along the way. Any loss drops back to `NoWins`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Progression {
    #[default]
    NoWins,
    OneWin,
    TwoWins,
    ThreeWins,
}

impl Progression {
    /// Units wagered in this state.
    pub const fn multiplier(&self) -> Chips {
        match self {
            Self::NoWins => 1,
            Self::OneWin => 3,
            Self::TwoWins => 2,
            Self::ThreeWins => 6,
        }
    }
    pub const fn next(self, resolution: Resolution) -> Self {
        match (self, resolution) {
            (_, Resolution::Lose) => Self::NoWins,
            (Self::NoWins, Resolution::Win) => Self::OneWin,
            (Self::OneWin, Resolution::Win) => Self::TwoWins,
            (Self::TwoWins, Resolution::Win) => Self::ThreeWins,
            (Self::ThreeWins, Resolution::Win) => Self::NoWins,
        }
    }
    /// The bet this state calls for on a given outcome.
    pub fn bet(&self, outcome: &Outcome) -> Bet {
        Bet::new(self.multiplier(), outcome.clone())
    }
}

impl std::fmt::Display for Progression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NoWins => write!(f, "no wins"),
            Self::OneWin => write!(f, "one win"),
            Self::TwoWins => write!(f, "two wins"),
            Self::ThreeWins => write!(f, "three wins"),
        }
    }
}
