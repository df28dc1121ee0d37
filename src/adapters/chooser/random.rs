//! Random reply chooser backed by `rand`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::ports::ReplyChooser;

/// Picks replies uniformly at random.
///
/// Seed it for reproducible transcripts; otherwise it seeds from entropy.
pub struct RandomReplyChooser {
    rng: Mutex<StdRng>,
}

impl RandomReplyChooser {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomReplyChooser {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ReplyChooser for RandomReplyChooser {
    fn choose(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        // A poisoned RNG is still a valid RNG
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(0..count)
    }
}
