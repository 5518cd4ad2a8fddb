use crate::{
    children::ChildStorage,
    storage::Storage,
    traversal::Traversable,
};
use super::{MultiwayTree, Node};

impl<T, C, S> Traversable for MultiwayTree<T, C, S>
where
    C: ChildStorage,
    S: Storage<Element = Node<T, C>, Key = C::Key>,
{
    type Value = T;
    type Cursor = C::Key;
    type Children<'a> = C::Keys<'a> where Self: 'a;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        self.root.clone()
    }
    #[track_caller]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        &self.node(cursor).value
    }
    #[track_caller]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node(cursor).parent.clone()
    }
    #[track_caller]
    fn num_children_of(&self, cursor: &Self::Cursor) -> usize {
        self.node(cursor).children.len()
    }
    #[track_caller]
    fn children_of(&self, cursor: &Self::Cursor) -> Self::Children<'_> {
        self.node(cursor).children.keys()
    }
}
