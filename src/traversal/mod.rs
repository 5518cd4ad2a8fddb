//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`]: a *trait for types which describe tree-like structures*, exposing them through cheaply clonable cursors
//! - [`BreadthFirst`], [`PreOrder`] and [`PostOrder`]: lazy iterators over the values of a `Traversable`, in level order, depth-first pre-order and depth-first post-order respectively
//!
//! All of the iterators are read-only, visit every node reachable from their starting point exactly once and are finite. They borrow the traversable, so the tree cannot be mutated while one is in progress; creating a new iterator starts over and reflects the current state of the tree.
//!
//! [`Traversable`]: trait.Traversable.html " "
//! [`BreadthFirst`]: struct.BreadthFirst.html " "
//! [`PreOrder`]: struct.PreOrder.html " "
//! [`PostOrder`]: struct.PostOrder.html " "

use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use std::collections::VecDeque;

/// Data structures which can be traversed through cursors.
pub trait Traversable {
    /// The payload of a node.
    type Value;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`. Cursors are only valid until the next structural mutation of the traversable.
    type Cursor: Clone + Debug + Eq;
    /// An iterator over cursors to the children of a node.
    type Children<'a>: Iterator<Item = Self::Cursor>
    where
        Self: 'a;

    /// Returns the cursor pointing to the root node, or `None` if the traversable has no nodes.
    fn cursor_to_root(&self) -> Option<Self::Cursor>;
    /// Returns a reference to the value of the node at the specified cursor.
    ///
    /// # Panics
    /// Required to panic if the cursor is invalid.
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value;
    /// Returns a cursor to the parent of the node at the specified cursor, or `None` if that node is the root node.
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns the number of children of the node at the specified cursor.
    fn num_children_of(&self, cursor: &Self::Cursor) -> usize;
    /// Returns an iterator over cursors to the children of the node at the specified cursor.
    fn children_of(&self, cursor: &Self::Cursor) -> Self::Children<'_>;

    /// Returns a cursor to the *`n`*th child of the node at the specified cursor, or `None` if the child at that index does not exist.
    #[inline]
    fn nth_child_of(&self, cursor: &Self::Cursor, child_num: usize) -> Option<Self::Cursor> {
        self.children_of(cursor).nth(child_num)
    }
    /// Iterates over the values of every node in level order, starting from the root.
    #[inline]
    fn breadth_first(&self) -> BreadthFirst<'_, Self>
    where
        Self: Sized,
    {
        BreadthFirst::new(self, self.cursor_to_root())
    }
    /// Iterates over the values of every node in depth-first pre-order, starting from the root.
    #[inline]
    fn pre_order(&self) -> PreOrder<'_, Self>
    where
        Self: Sized,
    {
        PreOrder::new(self, self.cursor_to_root())
    }
    /// Iterates over the values of every node in depth-first post-order, starting from the root.
    #[inline]
    fn post_order(&self) -> PostOrder<'_, Self>
    where
        Self: Sized,
    {
        PostOrder::new(self, self.cursor_to_root())
    }
}

/// A level-order iterator over the values of a [`Traversable`]: the starting node, then all of its children, then all of its grandchildren, and so on.
///
/// [`Traversable`]: trait.Traversable.html " "
pub struct BreadthFirst<'a, T: Traversable> {
    traversable: &'a T,
    queue: VecDeque<T::Cursor>,
}
impl<'a, T: Traversable> BreadthFirst<'a, T> {
    /// Creates an iterator over the subtree at `start`, or an empty one if `start` is `None`.
    pub fn new(traversable: &'a T, start: Option<T::Cursor>) -> Self {
        Self {
            traversable,
            queue: start.into_iter().collect(),
        }
    }
}
impl<'a, T: Traversable> Iterator for BreadthFirst<'a, T> {
    type Item = &'a T::Value;
    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.queue.pop_front()?;
        self.queue.extend(self.traversable.children_of(&cursor));
        Some(self.traversable.value_of(&cursor))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}
impl<T: Traversable> FusedIterator for BreadthFirst<'_, T> {}
impl<T: Traversable> Clone for BreadthFirst<'_, T> {
    fn clone(&self) -> Self {
        Self {
            traversable: self.traversable,
            queue: self.queue.clone(),
        }
    }
}
impl<T: Traversable> Debug for BreadthFirst<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirst")
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}

/// A depth-first iterator over the values of a [`Traversable`] which yields every node before its children.
///
/// [`Traversable`]: trait.Traversable.html " "
pub struct PreOrder<'a, T: Traversable> {
    traversable: &'a T,
    stack: Vec<T::Cursor>,
}
impl<'a, T: Traversable> PreOrder<'a, T> {
    /// Creates an iterator over the subtree at `start`, or an empty one if `start` is `None`.
    pub fn new(traversable: &'a T, start: Option<T::Cursor>) -> Self {
        Self {
            traversable,
            stack: start.into_iter().collect(),
        }
    }
}
impl<'a, T: Traversable> Iterator for PreOrder<'a, T> {
    type Item = &'a T::Value;
    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.stack.pop()?;
        // Pushed in reverse so that the first child ends up on top
        let first_child = self.stack.len();
        self.stack.extend(self.traversable.children_of(&cursor));
        self.stack[first_child..].reverse();
        Some(self.traversable.value_of(&cursor))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}
impl<T: Traversable> FusedIterator for PreOrder<'_, T> {}
impl<T: Traversable> Clone for PreOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            traversable: self.traversable,
            stack: self.stack.clone(),
        }
    }
}
impl<T: Traversable> Debug for PreOrder<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreOrder")
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}

/// A depth-first iterator over the values of a [`Traversable`] which yields every node after all of its children.
///
/// [`Traversable`]: trait.Traversable.html " "
pub struct PostOrder<'a, T: Traversable> {
    traversable: &'a T,
    /// Cursors along with whether their children have already been pushed.
    stack: Vec<(T::Cursor, bool)>,
}
impl<'a, T: Traversable> PostOrder<'a, T> {
    /// Creates an iterator over the subtree at `start`, or an empty one if `start` is `None`.
    pub fn new(traversable: &'a T, start: Option<T::Cursor>) -> Self {
        Self {
            traversable,
            stack: start.into_iter().map(|x| (x, false)).collect(),
        }
    }
}
impl<'a, T: Traversable> Iterator for PostOrder<'a, T> {
    type Item = &'a T::Value;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (cursor, expanded) = self.stack.pop()?;
            if expanded {
                return Some(self.traversable.value_of(&cursor));
            }
            let children = self.traversable.children_of(&cursor);
            self.stack.push((cursor, true));
            let first_child = self.stack.len();
            self.stack.extend(children.map(|x| (x, false)));
            self.stack[first_child..].reverse();
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}
impl<T: Traversable> FusedIterator for PostOrder<'_, T> {}
impl<T: Traversable> Clone for PostOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            traversable: self.traversable,
            stack: self.stack.clone(),
        }
    }
}
impl<T: Traversable> Debug for PostOrder<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostOrder")
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A tree laid out as a list of child lists, node `i` holding the value `i * 10`.
    struct Adjacency {
        children: Vec<Vec<usize>>,
        values: Vec<u32>,
    }
    impl Adjacency {
        fn new(children: Vec<Vec<usize>>) -> Self {
            let values = (0..children.len() as u32).map(|x| x * 10).collect();
            Self { children, values }
        }
    }
    impl Traversable for Adjacency {
        type Value = u32;
        type Cursor = usize;
        type Children<'a> = core::iter::Copied<core::slice::Iter<'a, usize>> where Self: 'a;

        fn cursor_to_root(&self) -> Option<usize> {
            if self.values.is_empty() {
                None
            } else {
                Some(0)
            }
        }
        fn value_of(&self, cursor: &usize) -> &u32 {
            &self.values[*cursor]
        }
        fn parent_of(&self, cursor: &usize) -> Option<usize> {
            self.children.iter().position(|x| x.contains(cursor))
        }
        fn num_children_of(&self, cursor: &usize) -> usize {
            self.children[*cursor].len()
        }
        fn children_of(&self, cursor: &usize) -> Self::Children<'_> {
            self.children[*cursor].iter().copied()
        }
    }

    fn sample() -> Adjacency {
        //      0
        //    1   2
        //   3 4   5
        Adjacency::new(vec![vec![1, 2], vec![3, 4], vec![5], vec![], vec![], vec![]])
    }

    #[test]
    fn orders() {
        let tree = sample();
        let bf: Vec<_> = tree.breadth_first().copied().collect();
        let pre: Vec<_> = tree.pre_order().copied().collect();
        let post: Vec<_> = tree.post_order().copied().collect();
        assert_eq!(bf, [0, 10, 20, 30, 40, 50]);
        assert_eq!(pre, [0, 10, 30, 40, 20, 50]);
        assert_eq!(post, [30, 40, 10, 50, 20, 0]);
    }

    #[test]
    fn empty_and_restartable() {
        let empty = Adjacency::new(vec![]);
        assert_eq!(empty.pre_order().count(), 0);
        assert_eq!(empty.post_order().next(), None);

        let tree = sample();
        let mut iter = tree.breadth_first();
        iter.next();
        assert_eq!(iter.count(), 5);
        assert_eq!(tree.breadth_first().count(), 6);
        assert_eq!(tree.nth_child_of(&1, 1), Some(4));
        assert_eq!(tree.parent_of(&5), Some(2));
    }

    #[test]
    fn subtree_start() {
        let tree = sample();
        let sub: Vec<_> = PreOrder::new(&tree, Some(1)).copied().collect();
        assert_eq!(sub, [10, 30, 40]);
    }
}
