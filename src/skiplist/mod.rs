//! Probabilistic linked hierarchy of subsequences.

mod config;
mod dump;
mod level;
mod map;

pub use self::config::{SkipMapConfig, DEFAULT_LEVEL_PROMOTION_PERCENT, DEFAULT_MAX_LEVEL_COUNT};
pub use self::map::{SkipMap, SkipMapIter, SkipMapLevelIter};
