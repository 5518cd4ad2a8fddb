use core::{fmt::Debug, iter::Cloned, slice};
use smallvec::SmallVec;
use crate::{storage::NodeKey, Error};
use super::ChildStorage;

/// Child storage which keeps children in insertion order, addressed by position.
///
/// Positions are not identities: erasing a child shifts every later sibling one position to the left. Up to four children are stored inline without a separate allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ordered<K = NodeKey> {
    children: SmallVec<[K; 4]>,
}
impl<K> Default for Ordered<K> {
    #[inline]
    fn default() -> Self {
        Self {
            children: SmallVec::new(),
        }
    }
}
impl<K: Clone + Debug + Eq> Ordered<K> {
    /// Returns the position of the specified child, or `None` if it's not a child of this storage.
    pub fn position_of(&self, key: &K) -> Option<usize> {
        self.children.iter().position(|x| x == key)
    }
}
impl<K: Clone + Debug + Eq> ChildStorage for Ordered<K> {
    type Key = K;
    type Label = ();
    type Address = usize;
    type Keys<'a> = Cloned<slice::Iter<'a, K>> where Self: 'a;

    #[inline(always)]
    fn len(&self) -> usize {
        self.children.len()
    }
    #[inline(always)]
    fn displaced_by(&self, _label: &()) -> Option<K> {
        None
    }
    #[inline]
    fn insert(&mut self, _label: (), key: K) {
        self.children.push(key);
    }
    fn remove(&mut self, _label: &(), key: &K) -> bool {
        if let Some(position) = self.position_of(key) {
            self.children.remove(position);
            true
        } else {
            false
        }
    }
    fn lookup(&self, position: &usize) -> Result<K, Error> {
        self.children
            .get(*position)
            .cloned()
            .ok_or(Error::OutOfRange {
                position: *position,
                len: self.children.len(),
            })
    }
    #[inline]
    fn keys(&self) -> Self::Keys<'_> {
        self.children.iter().cloned()
    }
    #[inline]
    fn clear(&mut self) {
        self.children.clear();
    }
}
