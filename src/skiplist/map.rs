use crate::arena::{NodeArena, Slot};
use crate::comparator::{Comparator, NaturalOrder};
use crate::error::Result;
use crate::skiplist::level::LevelGenerator;
use crate::skiplist::SkipMapConfig;
use std::cmp::Ordering;
use std::mem;
use std::ops::{Index, IndexMut};

const CHUNK_SIZE: usize = 1024;

// `None` stands for the tail sentinel.
type Link = Option<Slot>;

struct Node<K, V> {
    key: K,
    value: V,
    links: Vec<Link>,
}

// The node a descent stopped at on some level.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Position {
    Head,
    Node(Slot),
}

/// An ordered map implemented by a skiplist.
///
/// A skiplist is a probabilistic data structure that allows for binary search tree operations by
/// maintaining a linked hierarchy of subsequences. The first subsequence is essentially a sorted
/// linked list of all the elements that it contains. Each successive subsequence contains
/// approximately `level_promotion_percent` percent of the elements of the previous subsequence.
/// Using the sparser subsequences, elements can be skipped and searching and insertion of entries
/// can be done in approximately logarithmic time.
///
/// Keys are ordered by a `Comparator` owned by the map. Nodes live in an arena and are linked by
/// slot handles, so dropping the map releases every node at once.
///
/// # Examples
/// ```
/// use ordered_skipmap::skiplist::SkipMap;
///
/// let mut map = SkipMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.max(), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.insert(0, 5), Some(2));
/// ```
pub struct SkipMap<K, V, C = NaturalOrder> {
    arena: NodeArena<Node<K, V>>,
    head: Vec<Link>,
    update: Vec<Position>,
    levels: usize,
    level_generator: LevelGenerator,
    comparator: C,
    config: SkipMapConfig,
}

impl<K, V> SkipMap<K, V>
where
    K: Ord,
{
    /// Constructs a new, empty `SkipMap<K, V>` ordered by `K`'s `Ord` implementation with the
    /// default configuration.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::SkipMap;
    ///
    /// let map: SkipMap<u32, u32> = SkipMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Constructs a new, empty `SkipMap<K, V>` ordered by `K`'s `Ord` implementation.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if `config` fails validation.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::{SkipMap, SkipMapConfig};
    ///
    /// let config = SkipMapConfig::default().with_max_level_count(0);
    /// assert!(SkipMap::<u32, u32>::with_config(config).is_err());
    /// ```
    pub fn with_config(config: SkipMapConfig) -> Result<Self> {
        Self::with_config_and_comparator(config, NaturalOrder)
    }
}

impl<K, V, C> SkipMap<K, V, C>
where
    C: Comparator<K>,
{
    /// Constructs a new, empty `SkipMap<K, V, C>` ordered by `comparator` with the default
    /// configuration.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::SkipMap;
    ///
    /// let mut map = SkipMap::with_comparator(|l: &u32, r: &u32| r.cmp(l));
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// assert_eq!(map.min(), Some(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self::build(SkipMapConfig::default(), comparator)
    }

    /// Constructs a new, empty `SkipMap<K, V, C>` ordered by `comparator`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if `config` fails validation.
    pub fn with_config_and_comparator(config: SkipMapConfig, comparator: C) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, comparator))
    }

    fn build(config: SkipMapConfig, comparator: C) -> Self {
        debug!(
            "creating skipmap with max_level_count = {}, level_promotion_percent = {}",
            config.max_level_count, config.level_promotion_percent,
        );
        SkipMap {
            arena: NodeArena::new(CHUNK_SIZE),
            head: vec![None; config.max_level_count],
            update: vec![Position::Head; config.max_level_count],
            levels: 0,
            level_generator: LevelGenerator::new(&config),
            comparator,
            config,
        }
    }

    fn link(&self, position: Position, level: usize) -> Link {
        match position {
            Position::Head => self.head[level],
            Position::Node(slot) => self.arena[slot].links[level],
        }
    }

    fn link_mut(&mut self, position: Position, level: usize) -> &mut Link {
        match position {
            Position::Head => &mut self.head[level],
            Position::Node(slot) => &mut self.arena[slot].links[level],
        }
    }

    fn find(&self, key: &K) -> Option<Slot> {
        let mut curr = Position::Head;
        for level in (0..self.levels).rev() {
            while let Some(next) = self.link(curr, level) {
                match self.comparator.compare(&self.arena[next].key, key) {
                    Ordering::Less => curr = Position::Node(next),
                    Ordering::Equal => return Some(next),
                    Ordering::Greater => break,
                }
            }
        }
        None
    }

    // Same descent as `find`, but records the last position before `key` on every level.
    fn find_with_update(&mut self, key: &K) -> Option<Slot> {
        let mut curr = Position::Head;
        for level in (0..self.levels).rev() {
            while let Some(next) = self.link(curr, level) {
                match self.comparator.compare(&self.arena[next].key, key) {
                    Ordering::Less => curr = Position::Node(next),
                    Ordering::Equal => return Some(next),
                    Ordering::Greater => break,
                }
            }
            self.update[level] = curr;
        }
        None
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// replaced in place and the old value is returned.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::SkipMap;
    ///
    /// let mut map = SkipMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.find_with_update(&key) {
            return Some(mem::replace(&mut self.arena[slot].value, value));
        }

        let new_levels = self.level_generator.gen_level_count();
        if new_levels > self.levels {
            for level in self.levels..new_levels {
                self.update[level] = Position::Head;
            }
            debug!("raising level count from {} to {}", self.levels, new_levels);
            self.levels = new_levels;
        }

        let new_node = self.arena.allocate(Node {
            key,
            value,
            links: vec![None; new_levels],
        });

        for level in (0..new_levels).rev() {
            let prev = self.update[level];
            let next = mem::replace(self.link_mut(prev, level), Some(new_node));
            self.arena[new_node].links[level] = next;
        }

        None
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::SkipMap;
    ///
    /// let mut map = SkipMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::SkipMap;
    ///
    /// let mut map = SkipMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|slot| &self.arena[slot].value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::SkipMap;
    ///
    /// let mut map = SkipMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.find(key) {
            Some(slot) => Some(&mut self.arena[slot].value),
            None => None,
        }
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&K> {
        self.head
            .first()
            .and_then(|link| *link)
            .map(|slot| &self.arena[slot].key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&K> {
        let mut curr = Position::Head;
        for level in (0..self.levels).rev() {
            while let Some(next) = self.link(curr, level) {
                curr = Position::Node(next);
            }
        }
        match curr {
            Position::Head => None,
            Position::Node(slot) => Some(&self.arena[slot].key),
        }
    }
}

impl<K, V, C> SkipMap<K, V, C> {
    /// Returns the number of elements in the map.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::SkipMap;
    ///
    /// let mut map = SkipMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of levels currently occupied by at least one node. This never decreases
    /// and never exceeds the configured `max_level_count`.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Returns the configuration the map was built with.
    pub fn config(&self) -> &SkipMapConfig {
        &self.config
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::SkipMap;
    ///
    /// let mut map = SkipMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SkipMapIter<'_, K, V> {
        SkipMapIter {
            inner: self.iter_with_levels(),
        }
    }

    /// Returns an iterator over the map that also yields the number of levels each node occupies.
    ///
    /// # Examples
    /// ```
    /// use ordered_skipmap::skiplist::{SkipMap, SkipMapConfig};
    ///
    /// let config = SkipMapConfig::default()
    ///     .with_max_level_count(4)
    ///     .with_level_promotion_percent(100);
    /// let mut map = SkipMap::with_config(config).unwrap();
    /// map.insert(1, 'a');
    ///
    /// assert_eq!(map.iter_with_levels().collect::<Vec<_>>(), vec![(&1, &'a', 4)]);
    /// ```
    pub fn iter_with_levels(&self) -> SkipMapLevelIter<'_, K, V> {
        SkipMapLevelIter {
            arena: &self.arena,
            current: self.head.first().and_then(|link| *link),
            remaining: self.len(),
        }
    }
}

impl<K, V> Default for SkipMap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V, C> IntoIterator for &'a SkipMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = SkipMapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `SkipMap<K, V, C>` that also yields the level count of every node.
///
/// This iterator traverses the elements of the map in ascending order and yields
/// `(key, value, level count)` triples.
pub struct SkipMapLevelIter<'a, K, V> {
    arena: &'a NodeArena<Node<K, V>>,
    current: Link,
    remaining: usize,
}

impl<'a, K, V> Iterator for SkipMapLevelIter<'a, K, V> {
    type Item = (&'a K, &'a V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.current?;
        let arena = self.arena;
        let node = &arena[slot];
        self.current = node.links[0];
        self.remaining -= 1;
        Some((&node.key, &node.value, node.links.len()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for SkipMapLevelIter<'a, K, V> {}

/// An iterator for `SkipMap<K, V, C>`.
///
/// This iterator traverses the elements of the map in ascending order and yields immutable
/// references.
pub struct SkipMapIter<'a, K, V> {
    inner: SkipMapLevelIter<'a, K, V>,
}

impl<'a, K, V> Iterator for SkipMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value, _)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for SkipMapIter<'a, K, V> {}

impl<'a, K, V, C> Index<&'a K> for SkipMap<K, V, C>
where
    C: Comparator<K>,
{
    type Output = V;

    fn index(&self, key: &'a K) -> &Self::Output {
        self.get(key).expect("Key does not exist.")
    }
}

impl<'a, K, V, C> IndexMut<&'a K> for SkipMap<K, V, C>
where
    C: Comparator<K>,
{
    fn index_mut(&mut self, key: &'a K) -> &mut Self::Output {
        self.get_mut(key).expect("Key does not exist.")
    }
}
