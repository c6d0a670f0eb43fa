use crate::skiplist::SkipMapConfig;
use rand::{self, Rng, SeedableRng, XorShiftRng};

/// Draws the number of levels of newly inserted nodes.
///
/// Every node starts with one level and gains another for each consecutive uniform draw in
/// `[1, 100]` that falls at or below the promotion percent, up to `max_level_count`. The result is
/// a truncated geometric distribution where `P(count >= k) = (percent / 100) ^ (k - 1)`.
pub struct LevelGenerator {
    max_level_count: usize,
    promotion_percent: u32,
    rng: XorShiftRng,
}

impl LevelGenerator {
    /// Expects a validated config: a zero seed would panic inside the xorshift generator.
    pub fn new(config: &SkipMapConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => XorShiftRng::from_seed(seed),
            None => rand::weak_rng(),
        };
        LevelGenerator {
            max_level_count: config.max_level_count,
            promotion_percent: config.level_promotion_percent,
            rng,
        }
    }

    pub fn gen_level_count(&mut self) -> usize {
        let mut count = 1;
        while self.rng.gen_range(1, 101) <= self.promotion_percent && count < self.max_level_count {
            count += 1;
        }
        count
    }
}
