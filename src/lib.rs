//! Monte Carlo simulation of betting systems at a double-zero Roulette table.
//!
//! ## Table Mechanics
//!
//! - [`Outcome`] — A named wager with fixed payout odds
//! - [`Bin`] — The set of outcomes that pay off for one wheel number
//! - [`BinBuilder`] — Populates all 38 bins of a US wheel
//! - [`Wheel`] — Seedable random selection over the bins
//! - [`Bet`] — An amount staked on one outcome
//! - [`Table`] — Active bets with minimum and limit enforcement
//!
//! ## Strategies
//!
//! - [`Player`] — Trait every betting system implements
//! - [`players`] — Martingale, SevenReds, Cancellation, Fibonacci, 1-3-2-6, Passenger57, Random
//! - [`Strategy`] — Name-keyed lookup constructing a boxed [`Player`]
//!
//! ## Simulation
//!
//! - [`Game`] — One round: place, validate, spin, settle
//! - [`Simulator`] — Repeated sessions with [`Statistics`] over duration and peak stake
//! - [`Summary`] — Serializable result of a full run
mod bet;
mod bin;
mod builder;
mod config;
mod error;
mod game;
mod outcome;
mod player;
mod simulator;
mod statistics;
mod strategy;
mod summary;
mod table;
mod wheel;

pub mod players;

pub use bet::*;
pub use bin::*;
pub use builder::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use outcome::*;
pub use player::*;
pub use simulator::*;
pub use statistics::*;
pub use strategy::*;
pub use summary::*;
pub use table::*;
pub use wheel::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stake sizes and bet amounts in table units.
pub type Chips = i64;
/// Payout numerator; the denominator is always 1.
pub type Odds = u32;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Bins on a double-zero wheel (0..=36 plus 00).
pub const BINS: usize = 38;
/// Bin index holding the double-zero.
pub const ZERO_ZERO: usize = 37;
/// Smallest legal single bet.
pub const MINIMUM: Chips = 1;
/// Largest legal sum of bets in one round.
pub const LIMIT: Chips = 300;

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Starting stake for each session.
pub const STAKE: Chips = 100;
/// Round budget for each session.
pub const DURATION: usize = 250;
/// Sessions per simulation run.
pub const SAMPLES: usize = 50;
/// Flat bet for strategies that never vary their amount.
pub const UNIT: Chips = 1;
/// Consecutive reds SevenReds waits for before betting.
pub const STREAK: usize = 7;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        eprintln!("logger already initialized");
    }
}
