//! Monte Carlo single-elimination simulation
//!
//! Each trial plays the bracket round by round: adjacent slots `(2i, 2i + 1)`
//! meet, a bye sends its opponent through without touching the generator, and
//! a real pairing is decided by one uniform draw against the win probability.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::draw::DrawSlot;
use crate::error::InvalidDrawError;
use crate::lookup::RatingLookup;
use crate::probability::WinModel;
use crate::results::SimulationResult;

/// Where a trial is in its bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialState<'d> {
    /// Draw laid out, nothing played
    Seeded,
    /// `k` rounds still to play (the bracket has `2^k` slots)
    RoundInProgress(u32),
    Completed(&'d str),
}

#[derive(Debug, Clone, Copy)]
struct Entrant<'d> {
    id: &'d str,
    rating: f64,
}

/// One play-through of a draw.
///
/// Ratings are resolved once when the trial is created, so a seeded trial can
/// be cloned as a template for any number of play-throughs.
#[derive(Debug, Clone)]
pub struct Trial<'d> {
    slots: Vec<Option<Entrant<'d>>>,
    round: u32,
    state: TrialState<'d>,
}

impl<'d> Trial<'d> {
    pub fn new<L>(draw: &'d [DrawSlot], lookup: &L) -> Result<Self, InvalidDrawError>
    where
        L: RatingLookup + ?Sized,
    {
        if !draw.len().is_power_of_two() {
            return Err(InvalidDrawError::MalformedDraw(draw.len()));
        }
        if let [DrawSlot::Bye] = draw {
            return Err(InvalidDrawError::MalformedDraw(1));
        }

        let slots = draw
            .iter()
            .map(|slot| {
                slot.player().map(|id| Entrant {
                    id,
                    rating: lookup.rating(id),
                })
            })
            .collect();

        Ok(Self {
            slots,
            round: 1,
            state: TrialState::Seeded,
        })
    }

    pub fn state(&self) -> TrialState<'d> {
        self.state
    }

    /// 1-based number of the next round to be played
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Remaining slots in bracket order (`None` for a bye)
    pub fn slots(&self) -> Vec<Option<&'d str>> {
        self.slots.iter().map(|slot| slot.map(|e| e.id)).collect()
    }

    /// Play one round and return the new state.
    ///
    /// A completed trial is left as is.
    pub fn play_round<R>(&mut self, model: WinModel, rng: &mut R) -> Result<TrialState<'d>, InvalidDrawError>
    where
        R: Rng + ?Sized,
    {
        if let TrialState::Completed(_) = self.state {
            return Ok(self.state);
        }

        if self.slots.len() > 1 {
            let mut next = Vec::with_capacity(self.slots.len() / 2);
            for (pair, chunk) in self.slots.chunks_exact(2).enumerate() {
                let advancing = match (chunk[0], chunk[1]) {
                    (Some(a), None) => a,
                    (None, Some(b)) => b,
                    (None, None) => {
                        return Err(InvalidDrawError::DoubleBye {
                            round: self.round,
                            slot: pair * 2,
                        })
                    }
                    (Some(a), Some(b)) => {
                        let p_a = model.win_probability(a.rating, b.rating);
                        if rng.gen::<f64>() < p_a {
                            a
                        } else {
                            b
                        }
                    }
                };
                next.push(Some(advancing));
            }
            self.slots = next;
            self.round += 1;
        }

        self.state = match self.slots.as_slice() {
            [Some(champion)] => TrialState::Completed(champion.id),
            [None] => return Err(InvalidDrawError::MalformedDraw(1)),
            slots => TrialState::RoundInProgress(slots.len().trailing_zeros()),
        };
        Ok(self.state)
    }

    /// Play every remaining round and return the champion
    pub fn play_out<R>(mut self, model: WinModel, rng: &mut R) -> Result<&'d str, InvalidDrawError>
    where
        R: Rng + ?Sized,
    {
        loop {
            if let TrialState::Completed(champion) = self.play_round(model, rng)? {
                return Ok(champion);
            }
        }
    }
}

/// Runs Monte Carlo trials over a fixed draw and fixed ratings
#[derive(Debug, Clone, Default)]
pub struct BracketSimulator {
    config: SimulationConfig,
}

impl BracketSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play `trials` trials one after another, drawing from `rng`
    pub fn simulate<L, R>(
        &self,
        draw: &[DrawSlot],
        lookup: &L,
        trials: u64,
        rng: &mut R,
    ) -> Result<SimulationResult, InvalidDrawError>
    where
        L: RatingLookup + ?Sized,
        R: Rng + ?Sized,
    {
        if trials == 0 {
            return Err(InvalidDrawError::ZeroTrials);
        }
        let template = Trial::new(draw, lookup)?;

        let mut result = SimulationResult::new();
        for _ in 0..trials {
            let champion = template.clone().play_out(self.config.win_model, rng)?;
            result.record_champion(champion);
        }

        debug!(trials, slots = draw.len(), "simulated draw");
        Ok(result)
    }

    /// Play `trials` trials in batches on the rayon pool.
    ///
    /// One seed per batch is drawn from `rng` before any batch starts, and
    /// batches are merged in order, so the result depends only on the inputs
    /// and the generator state.
    pub fn simulate_parallel<L, R>(
        &self,
        draw: &[DrawSlot],
        lookup: &L,
        trials: u64,
        rng: &mut R,
    ) -> Result<SimulationResult, InvalidDrawError>
    where
        L: RatingLookup + ?Sized,
        R: Rng + ?Sized,
    {
        if trials == 0 {
            return Err(InvalidDrawError::ZeroTrials);
        }
        let batch_size = self.config.batch_size;
        if batch_size == 0 {
            return Err(InvalidDrawError::ZeroBatchSize);
        }
        let template = Trial::new(draw, lookup)?;
        let model = self.config.win_model;

        let batches: Vec<(u64, u64)> = (0..trials.div_ceil(batch_size))
            .map(|i| (rng.gen::<u64>(), batch_size.min(trials - i * batch_size)))
            .collect();

        let partials: Vec<Result<SimulationResult, InvalidDrawError>> = batches
            .par_iter()
            .map(|&(seed, count)| {
                let mut batch_rng = StdRng::seed_from_u64(seed);
                let mut partial = SimulationResult::new();
                for _ in 0..count {
                    partial.record_champion(template.clone().play_out(model, &mut batch_rng)?);
                }
                Ok(partial)
            })
            .collect();

        let mut result = SimulationResult::new();
        for partial in partials {
            result.merge(partial?);
        }

        debug!(trials, batches = batches.len(), slots = draw.len(), "simulated draw in parallel");
        Ok(result)
    }

    /// Simulate with the configured trial count, seed and execution mode
    pub fn run<L>(&self, draw: &[DrawSlot], lookup: &L) -> Result<SimulationResult, InvalidDrawError>
    where
        L: RatingLookup + ?Sized,
    {
        self.config.validate()?;
        let mut rng = match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                info!("no rng_seed configured, seeding from entropy");
                StdRng::from_entropy()
            }
        };

        if self.config.parallel {
            self.simulate_parallel(draw, lookup, self.config.trials, &mut rng)
        } else {
            self.simulate(draw, lookup, self.config.trials, &mut rng)
        }
    }
}

#[cfg(test)]
#[path = "simulator_tests.rs"]
mod simulator_tests;
