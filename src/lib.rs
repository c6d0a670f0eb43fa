//! An ordered map implemented by a probabilistic skiplist.
//!
//! `SkipMap` keeps its entries sorted by a caller supplied `Comparator` and supports insertion,
//! lookup, and in-order traversal in expected logarithmic time. Nodes are stored in an arena and
//! every map owns its own level generator, which can be seeded for reproducible structures.
//!
//! # Examples
//! ```
//! use ordered_skipmap::skiplist::{SkipMap, SkipMapConfig};
//!
//! let config = SkipMapConfig::default().with_seed([1, 2, 3, 4]);
//! let mut map = SkipMap::with_config(config).unwrap();
//! map.insert(4, 300);
//! map.insert(2, 100);
//! map.insert(1, 200);
//!
//! assert_eq!(
//!     map.iter().collect::<Vec<_>>(),
//!     vec![(&1, &200), (&2, &100), (&4, &300)],
//! );
//! ```

extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

mod arena;
pub mod comparator;
pub mod error;
pub mod skiplist;

pub use crate::comparator::{Comparator, NaturalOrder};
pub use crate::error::{Error, Result};
