use crate::children::ChildStorage;

/// A node of a multiway tree.
///
/// Created by the tree internally and only publicly exposed so that tree storages' generic arguments could be specified.
#[derive(Clone, Debug)]
pub struct Node<T, C>
where
    C: ChildStorage,
{
    pub(super) value: T,
    pub(super) parent: Option<C::Key>,
    /// What the node is stored under in its parent's child storage. `None` for the root.
    pub(super) label: Option<C::Label>,
    pub(super) children: C,
    /// Number of nodes on the longest path from this node down to a leaf, counting itself.
    pub(super) height: usize,
}

impl<T, C> Node<T, C>
where
    C: ChildStorage,
{
    /// Creates a root node.
    #[inline(always)]
    pub(super) fn root(value: T) -> Self {
        Self {
            value,
            parent: None,
            label: None,
            children: C::default(),
            height: 1,
        }
    }
    /// Creates a leaf node which is to be attached to `parent` under `label`.
    #[inline(always)]
    pub(super) fn leaf(value: T, parent: C::Key, label: C::Label) -> Self {
        Self {
            value,
            parent: Some(parent),
            label: Some(label),
            children: C::default(),
            height: 1,
        }
    }
}
