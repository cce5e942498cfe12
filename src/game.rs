use super::*;

/// One table and one wheel, resolving a round at a time.
///
/// A round is strictly ordered: the player places, the table validates,
/// the wheel spins, then every bet settles in placement order. A table
/// violation stops the round before the spin with nothing settled. The
/// table is cleared after settlement, so each round starts empty.
#[derive(Debug, Clone)]
pub struct Game<W = Wheel>
where
    W: Spin,
{
    wheel: W,
    table: Table,
}

impl<W> Game<W>
where
    W: Spin,
{
    pub fn new(wheel: W, table: Table) -> Self {
        Self { wheel, table }
    }
    pub fn wheel(&self) -> &W {
        &self.wheel
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Play one round for `player`.
    pub fn cycle(&mut self, player: &mut dyn Player) -> Result<(), RouletteError> {
        player.place(&mut self.table)?;
        self.table.validate()?;
        let winners = self.wheel.spin();
        for bet in self.table.iter() {
            match winners.contains(bet.outcome()) {
                true => player.win(bet),
                false => player.lose(bet),
            }
        }
        player.winners(winners);
        log::trace!("{} settled against {} at stake {}", player.name(), winners, player.stake());
        self.table.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::*;

    /// Always lands on the same bin.
    struct Rigged(Bin, usize);

    impl Rigged {
        fn on(names: &[&str]) -> Self {
            Self(names.iter().map(|n| Outcome::even(n)).collect(), 0)
        }
    }

    impl Spin for Rigged {
        fn spin(&mut self) -> &Bin {
            self.1 += 1;
            &self.0
        }
    }

    #[test]
    fn winning_bet_pays_out() {
        let ref mut game = Game::new(Rigged::on(&["Black"]), Table::default());
        let ref mut player = Passenger57::new(Outcome::even("Black"), 20);
        game.cycle(player).unwrap();
        assert_eq!(player.stake(), STAKE - 20 + 40);
        assert_eq!(game.wheel().1, 1);
    }

    #[test]
    fn losing_bet_stays_debited() {
        let ref mut game = Game::new(Rigged::on(&["Red"]), Table::default());
        let ref mut player = Passenger57::new(Outcome::even("Black"), 20);
        game.cycle(player).unwrap();
        assert_eq!(player.stake(), STAKE - 20);
    }

    #[test]
    fn losses_reach_the_strategy() {
        let ref mut game = Game::new(Rigged::on(&["Red"]), Table::default());
        let ref mut player = Martingale::new();
        game.cycle(player).unwrap();
        game.cycle(player).unwrap();
        assert_eq!(player.losses(), 2);
        assert_eq!(player.multiple(), 4);
    }

    #[test]
    fn invalid_table_skips_the_spin() {
        let ref mut game = Game::new(Rigged::on(&["Black"]), Table::new(10, 300));
        let ref mut player = Passenger57::new(Outcome::even("Black"), 5);
        let result = game.cycle(player);
        assert!(result.unwrap_err().is_table_limit());
        assert_eq!(game.wheel().1, 0);
        assert_eq!(game.table().len(), 1);
        assert_eq!(player.stake(), STAKE - 5);
    }

    #[test]
    fn table_clears_between_rounds() {
        let ref mut game = Game::new(Rigged::on(&["Black"]), Table::default());
        let ref mut player = Passenger57::new(Outcome::even("Black"), 200);
        game.cycle(player).unwrap();
        assert!(game.table().is_empty());
        game.cycle(player).unwrap();
        assert_eq!(player.stake(), STAKE + 400);
    }

    #[test]
    fn spectators_still_see_the_spin() {
        let ref mut game = Game::new(Rigged::on(&["Red"]), Table::default());
        let ref mut player = SevenReds::new();
        for _ in 0..STREAK {
            game.cycle(player).unwrap();
        }
        assert_eq!(player.reds(), 0);
        assert_eq!(player.stake(), STAKE);
        game.cycle(player).unwrap();
        assert_eq!(player.stake(), STAKE - 1);
    }

    #[test]
    fn seeded_wheel_replays_rounds() {
        let ref mut a = Game::new(Wheel::seeded(5), Table::default());
        let ref mut b = Game::new(Wheel::seeded(5), Table::default());
        let ref mut x = Passenger57::new(Outcome::even("Black"), 1);
        let ref mut y = Passenger57::new(Outcome::even("Black"), 1);
        for _ in 0..30 {
            a.cycle(x).unwrap();
            b.cycle(y).unwrap();
            assert_eq!(x.stake(), y.stake());
        }
    }
}
