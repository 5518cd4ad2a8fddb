mod common;

use multiway::{Error, KeyedTree, Traversable};
use rstest::{fixture, rstest};

fn level_order(tree: &KeyedTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

/// Two levels of keyed children below the root:
///
/// ```text
///         2
///     "0"/ \"1"
///       3   5
///      / \ / \
///     7 11 13 17
/// ```
#[fixture]
fn primes() -> KeyedTree<i32> {
    common::init_test_setup();
    let mut tree = KeyedTree::new();
    let mut root = tree.insert(2);
    {
        let mut child = root.insert("0".to_string(), 3);
        child.insert("0".to_string(), 7);
        child.insert("1".to_string(), 11);
    }
    {
        let mut child = root.insert("1".to_string(), 5);
        child.insert("0".to_string(), 13);
        child.insert("1".to_string(), 17);
    }
    tree
}

#[rstest]
fn test_default_tree_is_empty() {
    common::init_test_setup();
    let tree = KeyedTree::<i32>::default();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.root().unwrap_err(), Error::InvalidState("the tree is empty"));
    assert_eq!(tree.iter().next(), None);
}

#[rstest]
fn test_insert_root() {
    common::init_test_setup();
    let mut tree = KeyedTree::<i32>::new();
    tree.insert(2);
    assert!(!tree.is_empty());
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.depth(), 1);
    let root = tree.root().unwrap();
    assert_eq!(*root.value(), 2);
    assert!(root.is_root());
    assert!(root.is_leaf());
    assert_eq!(root.key(), None);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn test_direct_children_grow_size_not_depth(#[case] count: usize) {
    common::init_test_setup();
    let mut tree = KeyedTree::<usize>::new();
    tree.insert(0);
    for i in 1..=count {
        let mut root = tree.root_mut().unwrap();
        root.insert(i.to_string(), i);
        assert_eq!(root.len(), i);
        assert_eq!(tree.len(), 1 + i);
        assert_eq!(tree.depth(), 2);
    }
    let root = tree.root().unwrap();
    assert_eq!(root.len(), count);
    assert!(root.children().all(|child| child.is_leaf() && child.depth() == 2));
}

#[rstest]
fn test_insert_subnodes(primes: KeyedTree<i32>) {
    assert_eq!(primes.len(), 7);
    assert_eq!(primes.depth(), 3);
    assert_eq!(level_order(&primes), [2, 3, 5, 7, 11, 13, 17]);

    let root = primes.root().unwrap();
    assert_eq!(root.len(), 2);
    let leaf = root.child("1").unwrap().child("0").unwrap();
    assert_eq!(*leaf.value(), 13);
    assert_eq!(leaf.key().map(String::as_str), Some("0"));
    assert_eq!(*leaf.parent().unwrap().value(), 5);
    assert_eq!(leaf.depth(), 3);
}

#[rstest]
fn test_clear(mut primes: KeyedTree<i32>) {
    primes.clear();
    assert!(primes.is_empty());
    assert_eq!(primes.len(), 0);
    assert_eq!(primes.depth(), 0);
    assert!(level_order(&primes).is_empty());
}

#[rstest]
fn test_reinsert_root_replaces_tree(mut primes: KeyedTree<i32>) {
    primes.insert(19);
    assert_eq!(primes.len(), 1);
    assert_eq!(primes.depth(), 1);
    assert_eq!(level_order(&primes), [19]);
}

#[rstest]
fn test_erase_sequence(mut primes: KeyedTree<i32>) {
    let mut root = primes.root_mut().unwrap();
    assert_eq!(root.erase_child_at(&"1".to_string()), Ok(3));
    assert_eq!(level_order(&primes), [2, 3, 7, 11]);
    assert_eq!(primes.len(), 4);
    assert_eq!(primes.depth(), 3);

    let erased = primes
        .root_mut()
        .unwrap()
        .child_mut("0")
        .unwrap()
        .erase_key("1")
        .unwrap();
    assert_eq!(erased, 1);
    assert_eq!(level_order(&primes), [2, 3, 7]);
    assert_eq!(primes.len(), 3);

    assert_eq!(primes.root_mut().unwrap().erase(), 3);
    assert!(primes.is_empty());
    assert!(level_order(&primes).is_empty());
}

#[rstest]
fn test_erase_self_through_child(mut primes: KeyedTree<i32>) {
    let erased = primes.root_mut().unwrap().child_mut("0").unwrap().erase();
    assert_eq!(erased, 3);
    assert_eq!(level_order(&primes), [2, 5, 13, 17]);
    assert_eq!(primes.depth(), 3);
}

#[rstest]
#[case("2")]
#[case("")]
#[case("00")]
fn test_missing_key_is_not_found(primes: KeyedTree<i32>, #[case] key: &str) {
    let root = primes.root().unwrap();
    assert_eq!(
        root.child(key).unwrap_err(),
        Error::NotFound {
            key: format!("{:?}", key),
        },
    );
}

#[rstest]
fn test_failed_erase_leaves_tree_untouched(mut primes: KeyedTree<i32>) {
    let mut root = primes.root_mut().unwrap();
    assert!(matches!(root.erase_key("9"), Err(Error::NotFound { .. })));
    assert_eq!(primes.len(), 7);
    assert_eq!(primes.depth(), 3);
}

#[rstest]
fn test_replace_keeps_size_consistent(mut primes: KeyedTree<i32>) {
    let mut root = primes.root_mut().unwrap();
    root.insert("1".to_string(), 23);
    assert_eq!(primes.len(), 5);
    assert_eq!(primes.depth(), 3);
    assert_eq!(level_order(&primes), [2, 3, 23, 7, 11]);

    let mut root = primes.root_mut().unwrap();
    root.insert("0".to_string(), 29);
    assert_eq!(primes.len(), 3);
    assert_eq!(primes.depth(), 2);
}

#[rstest]
fn test_depth_first_orders(primes: KeyedTree<i32>) {
    assert_eq!(
        primes.pre_order().copied().collect::<Vec<_>>(),
        [2, 3, 7, 11, 5, 13, 17],
    );
    assert_eq!(
        primes.post_order().copied().collect::<Vec<_>>(),
        [7, 11, 3, 13, 17, 5, 2],
    );
    let child = primes.root().unwrap().child("1").unwrap();
    assert_eq!(child.descendants().copied().collect::<Vec<_>>(), [5, 13, 17]);
    assert_eq!(child.subtree_len(), 3);
}

#[rstest]
fn test_traversal_is_restartable(primes: KeyedTree<i32>) {
    let iter = primes.iter();
    let first = iter.clone().count();
    assert_eq!(iter.count(), first);
    assert_eq!((&primes).into_iter().count(), 7);
}
