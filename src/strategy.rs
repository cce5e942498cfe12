use super::*;
use crate::players::*;

/// Every betting system the simulator knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Martingale,
    SevenReds,
    Cancellation,
    Fibonacci,
    OneThreeTwoSix,
    Passenger57,
    Random,
}

impl Strategy {
    pub const ALL: [Self; 7] = [
        Self::Martingale,
        Self::SevenReds,
        Self::Cancellation,
        Self::Fibonacci,
        Self::OneThreeTwoSix,
        Self::Passenger57,
        Self::Random,
    ];

    /// Canonical name, also accepted by parsing.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Martingale => "Martingale",
            Self::SevenReds => "SevenReds",
            Self::Cancellation => "Cancellation",
            Self::Fibonacci => "Fibonacci",
            Self::OneThreeTwoSix => "1326",
            Self::Passenger57 => "Passenger57",
            Self::Random => "Random",
        }
    }

    /// Build a fresh player. `seed` drives the random strategy's choices;
    /// without one it draws from system entropy.
    pub fn player(&self, wheel: &Wheel, seed: Option<u64>) -> Result<Box<dyn Player>, RouletteError> {
        Ok(match self {
            Self::Martingale => Box::new(Martingale::new()),
            Self::SevenReds => Box::new(SevenReds::new()),
            Self::Cancellation => Box::new(Cancellation::new()),
            Self::Fibonacci => Box::new(Fibonacci::new()),
            Self::OneThreeTwoSix => Box::new(OneThreeTwoSix::new()),
            Self::Passenger57 => Box::new(Passenger57::on(wheel)?),
            Self::Random => match seed {
                Some(seed) => Box::new(Gambler::seeded(wheel, seed)),
                None => Box::new(Gambler::new(
                    wheel,
                    rand::SeedableRng::from_rng(&mut rand::rng()),
                )),
            },
        })
    }
}

impl TryFrom<&str> for Strategy {
    type Error = RouletteError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .or_else(|| match s.trim().to_ascii_lowercase().as_str() {
                "1-3-2-6" | "player1326" => Some(Self::OneThreeTwoSix),
                _ => None,
            })
            .ok_or_else(|| RouletteError::UnknownStrategy(s.to_string()))
    }
}

impl std::str::FromStr for Strategy {
    type Err = RouletteError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::try_from(strategy.name()), Ok(strategy));
        }
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(Strategy::try_from("sevenreds"), Ok(Strategy::SevenReds));
        assert_eq!(Strategy::try_from(" MARTINGALE "), Ok(Strategy::Martingale));
        assert_eq!(Strategy::try_from("1-3-2-6"), Ok(Strategy::OneThreeTwoSix));
    }

    #[test]
    fn unknown_names_fail() {
        assert_eq!(
            Strategy::try_from("Labouchere"),
            Err(RouletteError::UnknownStrategy("Labouchere".to_string()))
        );
    }

    #[test]
    fn builds_every_strategy() {
        let ref wheel = Wheel::seeded(0);
        for strategy in Strategy::ALL {
            let player = strategy.player(wheel, Some(1)).unwrap();
            assert_eq!(player.name(), strategy.name());
            assert_eq!(player.stake(), STAKE);
            assert_eq!(player.rounds(), DURATION);
        }
    }
}
