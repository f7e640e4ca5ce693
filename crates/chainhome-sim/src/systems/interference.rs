//! Radio interference level.
//!
//! Lower frequencies pick up more atmospheric noise; higher frequencies are
//! easier to jam. The result is capped at `MAX_INTERFERENCE`.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use chainhome_core::constants::MAX_INTERFERENCE;
use chainhome_core::types::Frequency;

pub fn level(frequency: Frequency, rng: &mut ChaCha8Rng) -> f64 {
    let mhz = frequency.mhz();
    let atmospheric = (30.0 - mhz) * 0.01;
    let jamming = rng.gen::<f64>() * 0.2 * (mhz / 20.0);
    (atmospheric + jamming).min(MAX_INTERFERENCE)
}
