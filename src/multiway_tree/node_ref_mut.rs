use core::{borrow::Borrow, fmt::Debug, mem};
use crate::{
    children::{ChildStorage, Ordered, Keyed},
    storage::{Storage, DefaultStorage},
    traversal::PreOrder,
    Error,
};
use super::{MultiwayTree, Node, NodeRef, NodeChildren};

/// A *mutable* reference to a node in a multiway tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree and modify it as a whole.
#[derive(Debug)]
pub struct NodeRefMut<'a, T, C = Ordered, S = DefaultStorage<Node<T, C>>>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    pub(super) tree: &'a mut MultiwayTree<T, C, S>,
    pub(super) key: C::Key,
}
impl<'a, T, C, S> NodeRefMut<'a, T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if it's not there.
    pub fn new_raw(tree: &'a mut MultiwayTree<T, C, S>, key: C::Key) -> Option<Self> {
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
    pub fn value(&self) -> &T {
        &self.tree.node(&self.key).value
    }
    /// Returns a *mutable* reference to the data stored in the node.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.tree.node_mut(&self.key).value
    }
    /// Replaces the data stored in the node, returning the old value.
    pub fn set_value(&mut self, value: T) -> T {
        mem::replace(self.value_mut(), value)
    }
    /// Returns the number of direct children of the node.
    pub fn len(&self) -> usize {
        self.as_node_ref().len()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        self.as_node_ref().is_leaf()
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    pub fn is_root(&self) -> bool {
        self.as_node_ref().is_root()
    }
    /// Returns the level of the node, 1 being the root.
    pub fn depth(&self) -> usize {
        self.as_node_ref().depth()
    }
    /// Returns the height of the subtree rooted at this node, 1 being a leaf.
    pub fn height(&self) -> usize {
        self.as_node_ref().height()
    }
    /// Returns the number of nodes in the subtree rooted at this node, including the node itself.
    pub fn subtree_len(&self) -> usize {
        self.as_node_ref().subtree_len()
    }
    /// Returns a reference to the parent node.
    ///
    /// # Errors
    /// [`InvalidOperation`] if the node is the root.
    ///
    /// [`InvalidOperation`]: ../enum.Error.html#variant.InvalidOperation " "
    pub fn parent(&self) -> Result<NodeRef<'_, T, C, S>, Error> {
        self.as_node_ref().parent()
    }
    /// Returns a *mutable* reference to the parent node.
    ///
    /// # Errors
    /// [`InvalidOperation`] if the node is the root.
    ///
    /// [`InvalidOperation`]: ../enum.Error.html#variant.InvalidOperation " "
    pub fn parent_mut(&mut self) -> Result<NodeRefMut<'_, T, C, S>, Error> {
        let key = self
            .tree
            .node(&self.key)
            .parent
            .clone()
            .ok_or(Error::InvalidOperation("the root node has no parent"))?;
        Ok(NodeRefMut {
            tree: self.tree,
            key,
        })
    }
    /// Returns an iterator over references to the children of the node.
    pub fn children(&self) -> NodeChildren<'_, T, C, S> {
        self.as_node_ref().children()
    }
    /// Returns a reference to the child at the specified address.
    ///
    /// # Errors
    /// [`OutOfRange`] or [`NotFound`], depending on the child storage.
    ///
    /// [`OutOfRange`]: ../enum.Error.html#variant.OutOfRange " "
    /// [`NotFound`]: ../enum.Error.html#variant.NotFound " "
    pub fn child_at(&self, address: &C::Address) -> Result<NodeRef<'_, T, C, S>, Error> {
        self.as_node_ref().child_at(address)
    }
    /// Returns a *mutable* reference to the child at the specified address.
    ///
    /// # Errors
    /// Same as [`child_at`].
    ///
    /// [`child_at`]: #method.child_at " "
    pub fn child_at_mut(&mut self, address: &C::Address) -> Result<NodeRefMut<'_, T, C, S>, Error> {
        let key = self.tree.node(&self.key).children.lookup(address)?;
        Ok(NodeRefMut {
            tree: self.tree,
            key,
        })
    }
    /// Iterates over the values of this node and all of its descendants in depth-first pre-order.
    pub fn descendants(&self) -> PreOrder<'_, MultiwayTree<T, C, S>> {
        PreOrder::new(&*self.tree, Some(self.key.clone()))
    }

    /// Erases a direct child of the node, identified by its raw key, along with the child's entire subtree. Returns the number of nodes destroyed.
    ///
    /// # Errors
    /// [`InvalidOperation`] if the key is stale or does not belong to a child of this node. The tree is left untouched in that case.
    ///
    /// [`InvalidOperation`]: ../enum.Error.html#variant.InvalidOperation " "
    pub fn erase_child(&mut self, child: &C::Key) -> Result<usize, Error> {
        let node = self
            .tree
            .storage
            .get(child)
            .ok_or(Error::InvalidOperation("the node handle is stale"))?;
        if node.parent.as_ref() != Some(&self.key) {
            return Err(Error::InvalidOperation("the node is not a child of this node"));
        }
        Ok(self.tree.remove_subtree(child.clone()))
    }
    /// Erases the child at the specified address along with its entire subtree. Returns the number of nodes destroyed.
    ///
    /// # Errors
    /// [`OutOfRange`] or [`NotFound`], depending on the child storage.
    ///
    /// [`OutOfRange`]: ../enum.Error.html#variant.OutOfRange " "
    /// [`NotFound`]: ../enum.Error.html#variant.NotFound " "
    pub fn erase_child_at(&mut self, address: &C::Address) -> Result<usize, Error> {
        let child = self.tree.node(&self.key).children.lookup(address)?;
        Ok(self.tree.remove_subtree(child))
    }
    /// Erases every child subtree of the node, keeping the node itself. Returns the number of nodes destroyed.
    pub fn erase_children(&mut self) -> usize {
        self.tree.remove_children(self.key.clone())
    }
    /// Erases the node along with its entire subtree, returning the number of nodes destroyed. Erasing the root empties the tree.
    pub fn erase(self) -> usize {
        self.tree.remove_subtree(self.key)
    }

    fn as_node_ref(&self) -> NodeRef<'_, T, C, S> {
        NodeRef::from(self)
    }
    fn attach(&mut self, label: C::Label, value: T) -> NodeRefMut<'_, T, C, S> {
        let key = self.tree.attach(self.key.clone(), label, value);
        NodeRefMut {
            tree: self.tree,
            key,
        }
    }
}
impl<'a, T, K, S> NodeRefMut<'a, T, Ordered<K>, S>
where
    K: Clone + Debug + Eq,
    S: Storage<Element = Node<T, Ordered<K>>, Key = K>,
{
    /// Appends a new child after the existing ones and returns a reference to it.
    pub fn insert(&mut self, value: T) -> NodeRefMut<'_, T, Ordered<K>, S> {
        self.attach((), value)
    }
    /// Returns a reference to the child at the specified position.
    ///
    /// # Errors
    /// [`OutOfRange`] if the node has `position` children or less.
    ///
    /// [`OutOfRange`]: ../enum.Error.html#variant.OutOfRange " "
    pub fn child(&self, position: usize) -> Result<NodeRef<'_, T, Ordered<K>, S>, Error> {
        self.child_at(&position)
    }
    /// Returns a *mutable* reference to the child at the specified position.
    ///
    /// # Errors
    /// [`OutOfRange`] if the node has `position` children or less.
    ///
    /// [`OutOfRange`]: ../enum.Error.html#variant.OutOfRange " "
    pub fn child_mut(&mut self, position: usize) -> Result<NodeRefMut<'_, T, Ordered<K>, S>, Error> {
        self.child_at_mut(&position)
    }
    /// Returns the current position of the node among its siblings, or `None` for the root.
    pub fn position(&self) -> Option<usize> {
        self.as_node_ref().position()
    }
}
impl<'a, T, Q, K, S> NodeRefMut<'a, T, Keyed<Q, K>, S>
where
    Q: Ord + Clone + Debug,
    K: Clone + Debug + Eq,
    S: Storage<Element = Node<T, Keyed<Q, K>>, Key = K>,
{
    /// Inserts a new child under `key` and returns a reference to it.
    ///
    /// If a child is already stored under `key`, it is erased together with its entire subtree before the new child is added.
    pub fn insert(&mut self, key: Q, value: T) -> NodeRefMut<'_, T, Keyed<Q, K>, S> {
        self.attach(key, value)
    }
    /// Returns a reference to the child stored under `key`, accepting any borrowed form of the key.
    ///
    /// # Errors
    /// [`NotFound`] if no child is stored under `key`.
    ///
    /// [`NotFound`]: ../enum.Error.html#variant.NotFound " "
    pub fn child<B>(&self, key: &B) -> Result<NodeRef<'_, T, Keyed<Q, K>, S>, Error>
    where
        Q: Borrow<B>,
        B: Ord + Debug + ?Sized,
    {
        self.as_node_ref().child(key)
    }
    /// Returns a *mutable* reference to the child stored under `key`, accepting any borrowed form of the key.
    ///
    /// # Errors
    /// [`NotFound`] if no child is stored under `key`.
    ///
    /// [`NotFound`]: ../enum.Error.html#variant.NotFound " "
    pub fn child_mut<B>(&mut self, key: &B) -> Result<NodeRefMut<'_, T, Keyed<Q, K>, S>, Error>
    where
        Q: Borrow<B>,
        B: Ord + Debug + ?Sized,
    {
        let child = self.child_key(key)?;
        Ok(NodeRefMut {
            tree: self.tree,
            key: child,
        })
    }
    /// Erases the child stored under `key` along with its entire subtree, accepting any borrowed form of the key. Returns the number of nodes destroyed.
    ///
    /// # Errors
    /// [`NotFound`] if no child is stored under `key`.
    ///
    /// [`NotFound`]: ../enum.Error.html#variant.NotFound " "
    pub fn erase_key<B>(&mut self, key: &B) -> Result<usize, Error>
    where
        Q: Borrow<B>,
        B: Ord + Debug + ?Sized,
    {
        let child = self.child_key(key)?;
        Ok(self.tree.remove_subtree(child))
    }
    /// Returns the key the node is stored under in its parent, or `None` for the root.
    pub fn key(&self) -> Option<&Q> {
        self.tree.node(&self.key).label.as_ref()
    }

    fn child_key<B>(&self, key: &B) -> Result<K, Error>
    where
        Q: Borrow<B>,
        B: Ord + Debug + ?Sized,
    {
        self.tree
            .node(&self.key)
            .children
            .get(key)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                key: format!("{:?}", key),
            })
    }
}

impl<'a, T, C, S> From<NodeRefMut<'a, T, C, S>> for NodeRef<'a, T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    fn from(op: NodeRefMut<'a, T, C, S>) -> Self {
        NodeRef {
            tree: op.tree,
            key: op.key,
        }
    }
}
impl<'a, 'b: 'a, T, C, S> From<&'a NodeRefMut<'b, T, C, S>> for NodeRef<'a, T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    fn from(op: &'a NodeRefMut<'b, T, C, S>) -> Self {
        NodeRef {
            tree: &*op.tree,
            key: op.key.clone(),
        }
    }
}
