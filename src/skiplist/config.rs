use crate::error::{Error, Result};

/// The default maximum number of levels of a `SkipMap`.
pub const DEFAULT_MAX_LEVEL_COUNT: usize = 32;

/// The default percent chance that a new node is promoted to the next level.
pub const DEFAULT_LEVEL_PROMOTION_PERCENT: u32 = 50;

/// Tuning parameters of a `SkipMap`.
///
/// A higher `level_promotion_percent` produces a taller structure that searches faster but holds
/// more links per node. `seed` makes the level distribution reproducible; when it is `None`, every
/// map draws a fresh seed from the thread-local generator.
///
/// # Examples
/// ```
/// use ordered_skipmap::skiplist::SkipMapConfig;
///
/// let config = SkipMapConfig::default()
///     .with_max_level_count(16)
///     .with_level_promotion_percent(25)
///     .with_seed([1, 2, 3, 4]);
///
/// assert!(config.validate().is_ok());
/// assert!(SkipMapConfig::default().with_max_level_count(0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SkipMapConfig {
    pub max_level_count: usize,
    pub level_promotion_percent: u32,
    pub seed: Option<[u32; 4]>,
}

impl SkipMapConfig {
    pub fn with_max_level_count(mut self, max_level_count: usize) -> Self {
        self.max_level_count = max_level_count;
        self
    }

    pub fn with_level_promotion_percent(mut self, level_promotion_percent: u32) -> Self {
        self.level_promotion_percent = level_promotion_percent;
        self
    }

    pub fn with_seed(mut self, seed: [u32; 4]) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the parameters describe a usable map.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if `max_level_count` is zero, if
    /// `level_promotion_percent` is outside of `1..=100`, or if the seed is all zeros.
    pub fn validate(&self) -> Result<()> {
        if self.max_level_count == 0 {
            return Err(Error::InvalidConfiguration(String::from(
                "max_level_count must be positive",
            )));
        }
        if self.level_promotion_percent < 1 || self.level_promotion_percent > 100 {
            return Err(Error::InvalidConfiguration(format!(
                "level_promotion_percent must be in 1..=100, got {}",
                self.level_promotion_percent,
            )));
        }
        if self.seed == Some([0; 4]) {
            return Err(Error::InvalidConfiguration(String::from(
                "seed must not be all zeros",
            )));
        }
        Ok(())
    }
}

impl Default for SkipMapConfig {
    fn default() -> Self {
        SkipMapConfig {
            max_level_count: DEFAULT_MAX_LEVEL_COUNT,
            level_promotion_percent: DEFAULT_LEVEL_PROMOTION_PERCENT,
            seed: None,
        }
    }
}
