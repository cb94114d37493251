use rand::rngs::StdRng;
use rand::SeedableRng;

/// Session RNG: fixed when a seed is configured, otherwise from OS entropy
pub(super) fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
