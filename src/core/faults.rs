use crate::core::FaultInjector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub const DEFAULT_FAILURE_ONE_IN: u32 = 4;

/// Fails each lookup independently with probability `1 / failure_one_in`.
#[derive(Debug, Clone)]
pub struct RandomFaults {
    rng: StdRng,
    failure_one_in: u32,
}

impl RandomFaults {
    pub fn new(failure_one_in: u32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            failure_one_in: failure_one_in.max(1),
        }
    }

    /// Seeds from the wall clock, so every run sees different failures.
    pub fn from_clock(failure_one_in: u32) -> Self {
        Self::new(failure_one_in, clock_seed())
    }
}

impl Default for RandomFaults {
    fn default() -> Self {
        Self::from_clock(DEFAULT_FAILURE_ONE_IN)
    }
}

impl FaultInjector for RandomFaults {
    fn lookup_succeeded(&mut self) -> bool {
        !self.rng.gen_ratio(1, self.failure_one_in)
    }
}

pub fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    (now.timestamp() as u64) ^ u64::from(now.timestamp_subsec_nanos())
}

/// Replays a fixed sequence of outcomes, then succeeds forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFaults {
    outcomes: VecDeque<bool>,
}

impl ScriptedFaults {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
        }
    }
}

impl FaultInjector for ScriptedFaults {
    fn lookup_succeeded(&mut self) -> bool {
        self.outcomes.pop_front().unwrap_or(true)
    }
}
