use super::*;

/// Runs independent sessions of one strategy and collects how long each
/// lasted and how high its stake peaked.
pub struct Simulator<W = Wheel>
where
    W: Spin,
{
    game: Game<W>,
    player: Box<dyn Player>,
    config: Config,
    durations: Statistics,
    maxima: Statistics,
}

impl Simulator<Wheel> {
    /// Wire up a wheel, table, and player from the config.
    pub fn build(strategy: Strategy, config: Config) -> Result<Self, RouletteError> {
        let wheel = config.wheel();
        let player = strategy.player(&wheel, config.player_seed())?;
        let table = config.table();
        Ok(Self::new(Game::new(wheel, table), player, config))
    }
}

impl<W> Simulator<W>
where
    W: Spin,
{
    pub fn new(game: Game<W>, player: Box<dyn Player>, config: Config) -> Self {
        Self {
            game,
            player,
            config,
            durations: Statistics::default(),
            maxima: Statistics::default(),
        }
    }
    pub fn player(&self) -> &dyn Player {
        self.player.as_ref()
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Rounds played in each gathered session.
    pub fn durations(&self) -> &Statistics {
        &self.durations
    }
    /// Peak stake in each gathered session.
    pub fn maxima(&self) -> &Statistics {
        &self.maxima
    }

    /// Play one session from a fresh stake and round budget until the
    /// player stops, returning the stake after every round.
    ///
    /// A table-limit violation ends the session early; the stakes seen
    /// so far are still returned. The player's progression is restarted
    /// on the way in and on an early exit.
    pub fn session(&mut self) -> Result<Vec<Chips>, RouletteError> {
        self.player.reset(self.config.stake, self.config.duration);
        self.player.restart();
        self.game.table_mut().clear();
        let mut stakes = Vec::new();
        while self.player.playing(self.game.table()) {
            match self.game.cycle(self.player.as_mut()) {
                Ok(()) => {}
                Err(e) if e.is_table_limit() => {
                    log::debug!("{} session ended after {} rounds: {}", self.player.name(), stakes.len(), e);
                    self.player.restart();
                    break;
                }
                Err(e) => return Err(e),
            }
            stakes.push(self.player.stake());
            self.player.bankroll_mut().tick();
        }
        Ok(stakes)
    }

    /// Run the configured number of sessions, recording each one's
    /// duration and peak stake.
    pub fn gather(&mut self) -> Result<(), RouletteError> {
        log::info!("simulating {} sessions of {}", self.config.samples, self.player.name());
        for sample in 0..self.config.samples {
            let stakes = self.session()?;
            let peak = stakes.iter().copied().max().unwrap_or(self.config.stake);
            log::debug!("session {:>4}: {:>4} rounds, peak {}", sample, stakes.len(), peak);
            self.maxima.push(peak);
            self.durations.push(stakes.len() as i64);
        }
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.player.name(), &self.durations, &self.maxima)
    }
}
