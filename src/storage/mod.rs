//! Utilities for treating the backing arena of trees generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the trait for the arenas every node of a tree is allocated in
//! - [`NodeKey`], the generational key type used by the default arena
//! - [`DefaultStorage`], a type definition for the arena used by trees unless a different one is specified
//!
//! Implementations are provided for [`SlotMap`] and [`DenseSlotMap`], as well as [`Slab`] if the `slab` feature is enabled.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`NodeKey`]: struct.NodeKey.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "
//! [`Slab`]: https://docs.rs/slab/*/slab/struct.Slab.html " "

mod slotmap_impl;
#[cfg(feature = "slab")]
mod slab_impl;

use core::fmt::Debug;

slotmap::new_key_type! {
    /// The key of a node inside the default arena.
    ///
    /// Keys are generational: once the node they point to is erased, they stay invalid even if the slot gets reused, which is what makes [`get`] return `None` for stale handles instead of aliasing a newer node.
    ///
    /// [`get`]: ../multiway_tree/struct.MultiwayTree.html#method.get " "
    pub struct NodeKey;
}

/// Trait for the arenas which can be the backing storage for trees.
///
/// There's a number of invariants which have to be followed by the container:
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - `len` must count every element which has been added and not yet removed, since trees use it as their node count;
/// - If an element is added at a key, it must be retrievable in the exact same state as it was inserted until it is removed or modified using a method which explicitly does so.
pub trait Storage: Sized {
    /// The type used for element naming.
    type Key: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified key, returning that key.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Removes and returns the element identified by `key` within the storage, or `None` if there is no such element.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Element>;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element in the collection, or `None` if the key is not present in the storage.
    fn get(&self, key: &Self::Key) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the key is not present in the storage.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element>;
    /// Removes every element from the storage.
    fn clear(&mut self);

    /// Returns `true` if the specified key is present in the storage, `false` otherwise.
    #[inline]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// The default implementation returns the length.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least `additional` more elements. Does nothing if capacity is already sufficient.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn reserve(&mut self, _additional: usize) {}
    /// Shrinks the capacity of the storage as much as possible.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The default arena used by the tree types when a storage type is not provided: a [`SlotMap`] keyed by [`NodeKey`].
///
/// [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
/// [`NodeKey`]: struct.NodeKey.html " "
pub type DefaultStorage<T> = slotmap::SlotMap<NodeKey, T>;
