//! Concrete betting systems.
//!
//! - [`Martingale`] — Doubles after every loss, resets on a win
//! - [`SevenReds`] — Martingale on Black, only after seven reds in a row
//! - [`Cancellation`] — Bets the ends of a sequence, crossing them off on wins
//! - [`Fibonacci`] — Climbs the Fibonacci sequence on losses
//! - [`OneThreeTwoSix`] — Four-state win progression driven by [`Progression`]
//! - [`Passenger57`] — Flat bet on Black every round
//! - [`Gambler`] — Flat bet on a uniformly random outcome
mod cancellation;
mod fibonacci;
mod gambler;
mod martingale;
mod one_three_two_six;
mod passenger57;
mod progression;
mod sevenreds;

pub use cancellation::*;
pub use fibonacci::*;
pub use gambler::*;
pub use martingale::*;
pub use one_three_two_six::*;
pub use passenger57::*;
pub use progression::*;
pub use sevenreds::*;
