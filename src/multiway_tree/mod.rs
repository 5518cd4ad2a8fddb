//! Multiway trees, ones in which every node can have any number of children, stored according to a pluggable [`ChildStorage`] strategy.
//!
//! # Example
//! ```rust
//! use multiway::{OrderedTree, Error};
//!
//! // A new tree is empty. The turbofish there is needed to state the type of the values, since
//! // nothing has been inserted yet.
//! let mut tree = OrderedTree::<&str>::new();
//! assert!(tree.is_empty());
//! assert_eq!(tree.root().unwrap_err(), Error::InvalidState("the tree is empty"));
//!
//! // Inserting into the tree itself creates the root. Everything below it is inserted through
//! // node references.
//! let mut root = tree.insert("root");
//! let first = root.insert("first").into_raw_key();
//! root.insert("second").insert("grandchild");
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(*tree.root().unwrap().child(1).unwrap().value(), "second");
//!
//! // Raw keys serve as long-lived handles to nodes.
//! tree.root_mut().unwrap().erase_child(&first).unwrap();
//! assert_eq!(tree.len(), 3);
//! assert!(tree.get(&first).is_none());
//!
//! // Inserting into the tree again replaces the whole structure.
//! tree.insert("new root");
//! assert_eq!(tree.len(), 1);
//! assert_eq!(tree.depth(), 1);
//! ```
//!
//! [`ChildStorage`]: ../children/trait.ChildStorage.html " "

use tracing::{debug, trace};
use crate::{
    children::{ChildStorage, Ordered, Keyed},
    storage::{Storage, DefaultStorage},
    traversal::{BreadthFirst, Traversable},
    Error,
};

mod node;
mod node_ref;
mod node_ref_mut;
mod impl_traversable;

pub use node::Node;
pub use node_ref::{NodeRef, NodeChildren};
pub use node_ref_mut::NodeRefMut;

/// A multiway tree.
///
/// The tree is either empty or has exactly one root node. Its size and depth are kept up to date on every structural change, so [`len`] and [`depth`] never walk the tree.
///
/// See the [module-level documentation] for more.
///
/// [`len`]: #method.len " "
/// [`depth`]: #method.depth " "
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct MultiwayTree<T, C = Ordered, S = DefaultStorage<Node<T, C>>>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    storage: S,
    root: Option<C::Key>,
}
impl<T, C, S> MultiwayTree<T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty tree with space preallocated for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns `true` if the tree has no root, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the total number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns the number of nodes on the longest path from the root to a leaf: 0 for an empty tree, 1 if there is only the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |root| self.node(root).height)
    }
    /// Returns the number of nodes the tree can hold without reallocating its arena.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Reserves space for at least `additional` more nodes.
    #[inline(always)]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    /// Shrinks the arena as much as the backing storage allows.
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }

    /// Returns a reference to the root node.
    ///
    /// # Errors
    /// [`InvalidState`] if the tree is empty.
    ///
    /// [`InvalidState`]: ../enum.Error.html#variant.InvalidState " "
    pub fn root(&self) -> Result<NodeRef<'_, T, C, S>, Error> {
        let key = self.root_key()?;
        Ok(NodeRef { tree: self, key })
    }
    /// Returns a *mutable* reference to the root node, allowing modifications to the entire tree.
    ///
    /// # Errors
    /// [`InvalidState`] if the tree is empty.
    ///
    /// [`InvalidState`]: ../enum.Error.html#variant.InvalidState " "
    pub fn root_mut(&mut self) -> Result<NodeRefMut<'_, T, C, S>, Error> {
        let key = self.root_key()?;
        Ok(NodeRefMut { tree: self, key })
    }
    /// Makes `value` the root of a fresh tree, destroying every node the tree had before, and returns a reference to the new root.
    ///
    /// This never appends: to add nodes below the root, insert through the reference returned by this method or by [`root_mut`].
    ///
    /// [`root_mut`]: #method.root_mut " "
    pub fn insert(&mut self, value: T) -> NodeRefMut<'_, T, C, S> {
        let replaced = self.storage.len();
        self.storage.clear();
        let key = self.storage.add(Node::root(value));
        self.root = Some(key.clone());
        debug!(replaced, "inserted new root");
        NodeRefMut { tree: self, key }
    }
    /// Destroys every node, leaving the tree empty.
    pub fn clear(&mut self) {
        let removed = self.storage.len();
        self.storage.clear();
        self.root = None;
        debug!(removed, "cleared tree");
    }

    /// Returns a reference to the node identified by a raw key, or `None` if the key is stale.
    ///
    /// This is how a handle kept across a mutation is turned back into a node reference.
    pub fn get(&self, key: &C::Key) -> Option<NodeRef<'_, T, C, S>> {
        NodeRef::new_raw(self, key.clone())
    }
    /// Returns a *mutable* reference to the node identified by a raw key, or `None` if the key is stale.
    pub fn get_mut(&mut self, key: &C::Key) -> Option<NodeRefMut<'_, T, C, S>> {
        NodeRefMut::new_raw(self, key.clone())
    }
    /// Erases the node identified by a raw key along with its entire subtree, returning the number of nodes destroyed. Erasing the root empties the tree.
    ///
    /// # Errors
    /// [`InvalidOperation`] if the key is stale.
    ///
    /// [`InvalidOperation`]: ../enum.Error.html#variant.InvalidOperation " "
    pub fn erase(&mut self, key: &C::Key) -> Result<usize, Error> {
        if self.storage.contains_key(key) {
            Ok(self.remove_subtree(key.clone()))
        } else {
            Err(Error::InvalidOperation("the node handle is stale"))
        }
    }

    /// Iterates over the values of all nodes in level order: the root, then its children, then its grandchildren, and so on.
    ///
    /// Depth-first orders are available through the [`Traversable`] trait.
    ///
    /// [`Traversable`]: ../traversal/trait.Traversable.html " "
    #[inline]
    pub fn iter(&self) -> BreadthFirst<'_, Self> {
        self.breadth_first()
    }

    fn root_key(&self) -> Result<C::Key, Error> {
        self.root
            .clone()
            .ok_or(Error::InvalidState("the tree is empty"))
    }
    #[track_caller]
    fn node(&self, key: &C::Key) -> &Node<T, C> {
        self.storage
            .get(key)
            .expect("node reference points to a node which is not in the tree")
    }
    #[track_caller]
    fn node_mut(&mut self, key: &C::Key) -> &mut Node<T, C> {
        self.storage
            .get_mut(key)
            .expect("node reference points to a node which is not in the tree")
    }

    /// Creates a child of `parent` under `label`, first destroying the child it displaces, if any.
    fn attach(&mut self, parent: C::Key, label: C::Label, value: T) -> C::Key {
        if let Some(displaced) = self.node(&parent).children.displaced_by(&label) {
            let removed = self.remove_subtree(displaced);
            trace!(parent = ?parent, label = ?label, removed, "replacing child");
        }
        let key = self
            .storage
            .add(Node::leaf(value, parent.clone(), label.clone()));
        self.node_mut(&parent).children.insert(label, key.clone());
        self.raise_heights(parent.clone(), 2);
        trace!(parent = ?parent, child = ?key, "attached child");
        key
    }
    /// Detaches the node from its parent and destroys its subtree, returning the number of nodes destroyed. The root takes the whole tree with it.
    fn remove_subtree(&mut self, key: C::Key) -> usize {
        let node = self.node(&key);
        let (parent, label) = if let (Some(parent), Some(label)) =
            (node.parent.clone(), node.label.clone())
        {
            (parent, label)
        } else {
            let removed = self.storage.len();
            self.clear();
            return removed;
        };
        self.node_mut(&parent).children.remove(&label, &key);
        let removed = self.destroy(key.clone());
        self.lower_heights(parent);
        trace!(node = ?key, removed, "erased subtree");
        removed
    }
    /// Destroys every subtree below the node, keeping the node itself.
    fn remove_children(&mut self, key: C::Key) -> usize {
        let node = self.node_mut(&key);
        let children = node.children.keys().collect::<Vec<_>>();
        node.children.clear();
        let removed: usize = children
            .into_iter()
            .map(|child| self.destroy(child))
            .sum();
        self.lower_heights(key.clone());
        trace!(node = ?key, removed, "erased children");
        removed
    }
    /// Removes a detached subtree from the arena.
    fn destroy(&mut self, key: C::Key) -> usize {
        let mut stack = vec![key];
        let mut removed = 0;
        while let Some(key) = stack.pop() {
            if let Some(node) = self.storage.remove(&key) {
                stack.extend(node.children.keys());
                removed += 1;
            }
        }
        removed
    }
    /// Propagates a child of height `height - 1` having appeared below `key`.
    fn raise_heights(&mut self, mut key: C::Key, mut height: usize) {
        loop {
            let node = self.node_mut(&key);
            if node.height >= height {
                break;
            }
            node.height = height;
            match node.parent.clone() {
                Some(parent) => {
                    key = parent;
                    height += 1;
                }
                None => break,
            }
        }
    }
    /// Recomputes cached heights from `key` upwards after children were removed below it.
    fn lower_heights(&mut self, mut key: C::Key) {
        loop {
            let height = 1 + self
                .node(&key)
                .children
                .keys()
                .map(|child| self.node(&child).height)
                .max()
                .unwrap_or(0);
            let node = self.node_mut(&key);
            if node.height == height {
                break;
            }
            node.height = height;
            match node.parent.clone() {
                Some(parent) => key = parent,
                None => break,
            }
        }
    }
}
impl<T, C, S> Default for MultiwayTree<T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
impl<'a, T, C, S> IntoIterator for &'a MultiwayTree<T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    type Item = &'a T;
    type IntoIter = BreadthFirst<'a, MultiwayTree<T, C, S>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A tree whose children are kept in insertion order, using the default storage.
pub type OrderedTree<T> = MultiwayTree<T, Ordered>;
/// A tree whose children are addressed by keys of type `Q`, using the default storage.
pub type KeyedTree<T, Q = String> = MultiwayTree<T, Keyed<Q>>;

/// A tree whose children are kept in insertion order, using a [`Slab`] as backing storage.
///
/// [`Slab`]: https://docs.rs/slab/*/slab/struct.Slab.html " "
#[cfg(feature = "slab")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slab")))]
pub type SlabOrderedTree<T> =
    MultiwayTree<T, Ordered<usize>, slab::Slab<Node<T, Ordered<usize>>>>;
/// A tree whose children are addressed by keys of type `Q`, using a [`Slab`] as backing storage.
///
/// [`Slab`]: https://docs.rs/slab/*/slab/struct.Slab.html " "
#[cfg(feature = "slab")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slab")))]
pub type SlabKeyedTree<T, Q = String> =
    MultiwayTree<T, Keyed<Q, usize>, slab::Slab<Node<T, Keyed<Q, usize>>>>;
