use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;

/// Anything that can produce the winning bin for one round.
///
/// [`Game`] is generic over this so tests can rig the result.
pub trait Spin {
    fn spin(&mut self) -> &Bin;
}

/// A double-zero wheel: 38 populated bins, a catalog of every outcome by
/// name, and its own random source.
#[derive(Debug, Clone)]
pub struct Wheel {
    bins: Vec<Bin>,
    catalog: BTreeMap<String, Outcome>,
    rng: SmallRng,
}

impl Wheel {
    /// A wheel seeded from system entropy.
    pub fn new() -> Self {
        Self::from(SmallRng::from_rng(&mut rand::rng()))
    }
    /// A wheel whose spins replay exactly for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
    /// The bin at a given index; 37 is the double-zero.
    pub fn get(&self, index: usize) -> Option<&Bin> {
        self.bins.get(index)
    }
    pub fn bins(&self) -> impl Iterator<Item = &Bin> {
        self.bins.iter()
    }
    /// Catalog lookup by name.
    pub fn outcome(&self, name: &str) -> Result<Outcome, RouletteError> {
        self.catalog
            .get(name)
            .cloned()
            .ok_or_else(|| RouletteError::UnknownOutcome(name.to_string()))
    }
    /// Every distinct outcome on the wheel, sorted by name.
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.catalog.values()
    }
}

impl From<SmallRng> for Wheel {
    fn from(rng: SmallRng) -> Self {
        let bins = BinBuilder::new().build();
        let catalog = bins
            .iter()
            .flat_map(|bin| bin.iter())
            .map(|outcome| (outcome.name().to_string(), outcome.clone()))
            .collect();
        Self { bins, catalog, rng }
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}

impl Spin for Wheel {
    fn spin(&mut self) -> &Bin {
        let index = self.rng.random_range(0..self.bins.len());
        log::trace!("ball lands in bin {}", index);
        &self.bins[index]
    }
}
