use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// Боевой RNG: равномерное перемешивание через `thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же колоды при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// RNG сессии: системный или с фиксированным seed (флаг `--seed`).
#[derive(Clone, Debug)]
pub enum SessionRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl SessionRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => SessionRng::Seeded(DeterministicRng::from_seed(seed)),
            None => SessionRng::System(SystemRng),
        }
    }
}

impl RandomSource for SessionRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            SessionRng::System(rng) => rng.shuffle(slice),
            SessionRng::Seeded(rng) => rng.shuffle(slice),
        }
    }
}
