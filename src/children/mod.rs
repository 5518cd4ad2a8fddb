//! Strategies for storing and addressing the children of a node.
//!
//! Every node of a [`MultiwayTree`] owns one child storage, picked for the whole tree through its `C` type parameter:
//! - [`Ordered`]: children are kept in insertion order and addressed by their zero-based position
//! - [`Keyed`]: children are addressed by a key which is unique among siblings; inserting with a key which is already taken replaces the old child together with its subtree
//!
//! Both only ever hold the arena keys of the children; the nodes themselves live in the tree's [`Storage`].
//!
//! [`MultiwayTree`]: ../multiway_tree/struct.MultiwayTree.html " "
//! [`Ordered`]: struct.Ordered.html " "
//! [`Keyed`]: struct.Keyed.html " "
//! [`Storage`]: ../storage/trait.Storage.html " "

mod ordered;
mod keyed;
pub use ordered::Ordered;
pub use keyed::Keyed;

use core::fmt::Debug;
use crate::Error;

/// The capability set shared by all child storage strategies.
///
/// Implementations only manage the sibling list of a single node. Keeping the tree-wide size and depth in sync is up to the tree.
pub trait ChildStorage: Default + Debug {
    /// The arena key of a child node.
    type Key: Clone + Debug + Eq;
    /// The label a child is inserted under, remembered by the child itself so that it can be detached from its parent without a search. `()` for storages which don't label their children.
    type Label: Clone + Debug;
    /// What callers use to look up a child.
    type Address: Debug;
    /// An iterator over the arena keys of the children, in the storage's iteration order.
    type Keys<'a>: Iterator<Item = Self::Key>
    where
        Self: 'a;

    /// Returns the number of children.
    fn len(&self) -> usize;
    /// Returns the child which would get replaced if a new child were inserted under `label`, if any.
    fn displaced_by(&self, label: &Self::Label) -> Option<Self::Key>;
    /// Adds a child. Callers are expected to have removed the child reported by `displaced_by` beforehand.
    fn insert(&mut self, label: Self::Label, key: Self::Key);
    /// Detaches the specified child, returning `false` if it was not a child of this storage.
    fn remove(&mut self, label: &Self::Label, key: &Self::Key) -> bool;
    /// Looks up a child by its address.
    ///
    /// # Errors
    /// [`OutOfRange`] for positions past the end, [`NotFound`] for keys without a child.
    ///
    /// [`OutOfRange`]: ../enum.Error.html#variant.OutOfRange " "
    /// [`NotFound`]: ../enum.Error.html#variant.NotFound " "
    fn lookup(&self, address: &Self::Address) -> Result<Self::Key, Error>;
    /// Returns an iterator over the arena keys of the children.
    fn keys(&self) -> Self::Keys<'_>;
    /// Detaches every child.
    fn clear(&mut self);

    /// Returns `true` if there are no children, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
