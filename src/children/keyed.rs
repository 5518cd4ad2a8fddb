use core::{borrow::Borrow, fmt::Debug, iter::Cloned};
use std::collections::{btree_map, BTreeMap};
use crate::{storage::NodeKey, Error};
use super::ChildStorage;

/// Child storage which addresses children by a key that is unique among siblings.
///
/// Children are iterated in key order. Inserting a child under a key which is already taken replaces the previous child *along with its entire subtree*.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Keyed<Q = String, K = NodeKey> {
    children: BTreeMap<Q, K>,
}
impl<Q, K> Default for Keyed<Q, K> {
    #[inline]
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }
}
impl<Q, K> Keyed<Q, K>
where
    Q: Ord + Clone + Debug,
    K: Clone + Debug + Eq,
{
    /// Returns the arena key of the child stored under `key`, accepting any borrowed form of the key.
    pub fn get<B>(&self, key: &B) -> Option<&K>
    where
        Q: Borrow<B>,
        B: Ord + ?Sized,
    {
        self.children.get(key)
    }
    /// Returns `true` if a child is stored under `key`.
    pub fn contains<B>(&self, key: &B) -> bool
    where
        Q: Borrow<B>,
        B: Ord + ?Sized,
    {
        self.children.contains_key(key)
    }
    /// Returns an iterator over the keys of the children, in order.
    pub fn labels(&self) -> btree_map::Keys<'_, Q, K> {
        self.children.keys()
    }
}
impl<Q, K> ChildStorage for Keyed<Q, K>
where
    Q: Ord + Clone + Debug,
    K: Clone + Debug + Eq,
{
    type Key = K;
    type Label = Q;
    type Address = Q;
    type Keys<'a> = Cloned<btree_map::Values<'a, Q, K>> where Self: 'a;

    #[inline(always)]
    fn len(&self) -> usize {
        self.children.len()
    }
    #[inline]
    fn displaced_by(&self, label: &Q) -> Option<K> {
        self.children.get(label).cloned()
    }
    #[inline]
    fn insert(&mut self, label: Q, key: K) {
        self.children.insert(label, key);
    }
    fn remove(&mut self, label: &Q, key: &K) -> bool {
        // Only detach if the label still refers to this very child
        if self.children.get(label) == Some(key) {
            self.children.remove(label);
            true
        } else {
            false
        }
    }
    fn lookup(&self, address: &Q) -> Result<K, Error> {
        self.children
            .get(address)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                key: format!("{:?}", address),
            })
    }
    #[inline]
    fn keys(&self) -> Self::Keys<'_> {
        self.children.values().cloned()
    }
    #[inline]
    fn clear(&mut self) {
        self.children.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taken_key_reports_displaced_child() {
        let mut children = Keyed::<String, u32>::default();
        children.insert("b".into(), 2);
        children.insert("a".into(), 1);
        assert_eq!(children.displaced_by(&"a".into()), Some(1));
        assert_eq!(children.displaced_by(&"c".into()), None);
        assert_eq!(children.get("b"), Some(&2));
        // Key order, not insertion order
        assert_eq!(children.keys().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn stale_label_does_not_detach_replacement() {
        let mut children = Keyed::<&str, u32>::default();
        children.insert("x", 1);
        children.insert("x", 2);
        assert!(!children.remove(&"x", &1));
        assert_eq!(children.len(), 1);
        assert!(children.remove(&"x", &2));
        assert!(children.is_empty());
    }

    #[test]
    fn labels_follow_key_order() {
        let mut children = Keyed::<String, u32>::default();
        children.insert("pear".into(), 1);
        children.insert("apple".into(), 2);
        children.insert("fig".into(), 3);
        assert!(children.contains("fig"));
        assert!(!children.contains("plum"));
        assert_eq!(
            children.labels().map(String::as_str).collect::<Vec<_>>(),
            ["apple", "fig", "pear"],
        );
        assert!(children.remove(&"fig".into(), &3));
        assert!(!children.contains("fig"));
    }

    #[test]
    fn missing_key_is_not_found() {
        let children = Keyed::<String, u32>::default();
        assert_eq!(
            children.lookup(&"nope".into()),
            Err(Error::NotFound {
                key: String::from("\"nope\""),
            }),
        );
    }
}
