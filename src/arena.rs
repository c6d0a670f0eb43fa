//! Chunked slot storage for skiplist nodes.

use std::ops::{Index, IndexMut};

/// A handle to a node stored in a `NodeArena<T>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Slot {
    chunk_index: usize,
    block_index: usize,
}

/// An append-only allocator that only allocates a single type of object.
///
/// Objects are addressed by `Slot` handles instead of pointers, so links between nodes are plain
/// integers and every object is destroyed in one pass when the arena is dropped. When the current
/// chunk is full, another chunk is allocated so existing objects are never moved.
pub struct NodeArena<T> {
    chunks: Vec<Vec<T>>,
    chunk_size: usize,
    len: usize,
}

impl<T> NodeArena<T> {
    /// Constructs a new, empty `NodeArena<T>` with a specific number of objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        NodeArena {
            chunks: Vec::new(),
            chunk_size,
            len: 0,
        }
    }

    /// Stores an object in the arena and returns the `Slot` that addresses it.
    pub fn allocate(&mut self, value: T) -> Slot {
        let needs_chunk = match self.chunks.last() {
            Some(chunk) => chunk.len() == self.chunk_size,
            None => true,
        };
        if needs_chunk {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
        }

        let chunk_index = self.chunks.len() - 1;
        let chunk = &mut self.chunks[chunk_index];
        chunk.push(value);
        self.len += 1;
        Slot {
            chunk_index,
            block_index: chunk.len() - 1,
        }
    }

    /// Returns an immutable reference to an object. Returns `None` if the slot was not produced by
    /// this arena.
    pub fn get(&self, slot: &Slot) -> Option<&T> {
        self.chunks
            .get(slot.chunk_index)
            .and_then(|chunk| chunk.get(slot.block_index))
    }

    /// Returns a mutable reference to an object. Returns `None` if the slot was not produced by
    /// this arena.
    pub fn get_mut(&mut self, slot: &Slot) -> Option<&mut T> {
        self.chunks
            .get_mut(slot.chunk_index)
            .and_then(|chunk| chunk.get_mut(slot.block_index))
    }

    /// Returns the number of objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl<T> Index<Slot> for NodeArena<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &Self::Output {
        self.get(&slot).expect("Error: slot out of bounds.")
    }
}

impl<T> IndexMut<Slot> for NodeArena<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut Self::Output {
        self.get_mut(&slot).expect("Error: slot out of bounds.")
    }
}
