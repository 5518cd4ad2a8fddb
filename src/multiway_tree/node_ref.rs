use core::{
    borrow::Borrow,
    fmt::{self, Debug, Formatter},
};
use crate::{
    children::{ChildStorage, Ordered, Keyed},
    storage::{Storage, DefaultStorage},
    traversal::PreOrder,
    Error,
};
use super::{MultiwayTree, Node};

/// A reference to a node in a multiway tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
#[derive(Debug)]
pub struct NodeRef<'a, T, C = Ordered, S = DefaultStorage<Node<T, C>>>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    pub(super) tree: &'a MultiwayTree<T, C, S>,
    pub(super) key: C::Key,
}
impl<'a, T, C, S> NodeRef<'a, T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's not there.
    pub fn new_raw(tree: &'a MultiwayTree<T, C, S>, key: C::Key) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(Self { tree, key })
        } else {
            None
        }
    }
    /// Returns a reference to the raw storage key for the node.
    pub fn raw_key(&self) -> &C::Key {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node, which can be used as a long-lived handle.
    pub fn into_raw_key(self) -> C::Key {
        self.key
    }
    /// Returns a reference to the data stored in the node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns the number of direct children of the node.
    pub fn len(&self) -> usize {
        self.node().children.len()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        self.node().children.is_empty()
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns a reference to the parent node.
    ///
    /// # Errors
    /// [`InvalidOperation`] if the node is the root.
    ///
    /// [`InvalidOperation`]: ../enum.Error.html#variant.InvalidOperation " "
    pub fn parent(&self) -> Result<Self, Error> {
        self.node()
            .parent
            .clone()
            .map(|key| Self {
                tree: self.tree,
                key,
            })
            .ok_or(Error::InvalidOperation("the root node has no parent"))
    }
    /// Returns an iterator over references to the children of the node, in the order of its child storage.
    pub fn children(&self) -> NodeChildren<'a, T, C, S> {
        NodeChildren {
            tree: self.tree,
            keys: self.node().children.keys(),
        }
    }
    /// Returns a reference to the child at the specified address.
    ///
    /// # Errors
    /// [`OutOfRange`] or [`NotFound`], depending on the child storage.
    ///
    /// [`OutOfRange`]: ../enum.Error.html#variant.OutOfRange " "
    /// [`NotFound`]: ../enum.Error.html#variant.NotFound " "
    pub fn child_at(&self, address: &C::Address) -> Result<Self, Error> {
        let key = self.node().children.lookup(address)?;
        Ok(Self {
            tree: self.tree,
            key,
        })
    }
    /// Returns the number of nodes on the path from the root to this node, counting both ends: 1 for the root.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut node = self.node();
        while let Some(parent) = &node.parent {
            node = self.tree.node(parent);
            depth += 1;
        }
        depth
    }
    /// Returns the number of nodes on the longest path from this node down to a leaf, counting both ends: 1 for a leaf.
    pub fn height(&self) -> usize {
        self.node().height
    }
    /// Returns the number of nodes in the subtree rooted at this node, including the node itself.
    pub fn subtree_len(&self) -> usize {
        self.descendants().count()
    }
    /// Iterates over the values of this node and all of its descendants in depth-first pre-order.
    pub fn descendants(&self) -> PreOrder<'a, MultiwayTree<T, C, S>> {
        PreOrder::new(self.tree, Some(self.key.clone()))
    }

    pub(super) fn node(&self) -> &'a Node<T, C> {
        self.tree.node(&self.key)
    }
}
impl<'a, T, K, S> NodeRef<'a, T, Ordered<K>, S>
where
    K: Clone + Debug + Eq,
    S: Storage<Element = Node<T, Ordered<K>>, Key = K>,
{
    /// Returns a reference to the child at the specified position.
    ///
    /// # Errors
    /// [`OutOfRange`] if the node has `position` children or less.
    ///
    /// [`OutOfRange`]: ../enum.Error.html#variant.OutOfRange " "
    pub fn child(&self, position: usize) -> Result<Self, Error> {
        self.child_at(&position)
    }
    /// Returns the current position of the node among its siblings, or `None` for the root.
    ///
    /// Positions shift when earlier siblings are erased.
    pub fn position(&self) -> Option<usize> {
        let parent = self.node().parent.as_ref()?;
        self.tree.node(parent).children.position_of(&self.key)
    }
}
impl<'a, T, Q, K, S> NodeRef<'a, T, Keyed<Q, K>, S>
where
    Q: Ord + Clone + Debug,
    K: Clone + Debug + Eq,
    S: Storage<Element = Node<T, Keyed<Q, K>>, Key = K>,
{
    /// Returns a reference to the child stored under `key`, accepting any borrowed form of the key.
    ///
    /// # Errors
    /// [`NotFound`] if no child is stored under `key`.
    ///
    /// [`NotFound`]: ../enum.Error.html#variant.NotFound " "
    pub fn child<B>(&self, key: &B) -> Result<Self, Error>
    where
        Q: Borrow<B>,
        B: Ord + Debug + ?Sized,
    {
        let child = self
            .node()
            .children
            .get(key)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                key: format!("{:?}", key),
            })?;
        Ok(Self {
            tree: self.tree,
            key: child,
        })
    }
    /// Returns the key the node is stored under in its parent, or `None` for the root.
    pub fn key(&self) -> Option<&'a Q> {
        self.node().label.as_ref()
    }
}
impl<T, C, S> Copy for NodeRef<'_, T, C, S>
where
    C: ChildStorage,
    C::Key: Copy,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
}
impl<T, C, S> Clone for NodeRef<'_, T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}

/// An iterator over references to the children of a multiway tree node.
pub struct NodeChildren<'a, T, C = Ordered, S = DefaultStorage<Node<T, C>>>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    tree: &'a MultiwayTree<T, C, S>,
    keys: C::Keys<'a>,
}
impl<'a, T, C, S> Iterator for NodeChildren<'a, T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    type Item = NodeRef<'a, T, C, S>;
    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next().map(|key| NodeRef {
            tree: self.tree,
            key,
        })
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}
impl<T, C, S> Debug for NodeChildren<'_, T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeChildren").finish_non_exhaustive()
    }
}
