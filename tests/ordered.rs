mod common;

use multiway::{Error, OrderedTree, Traversable};
use rstest::{fixture, rstest};

/// ```text
///       a
///     / | \
///    b  c  d
///   / \    |
///  e   f   g
///          |
///          h
/// ```
#[fixture]
fn letters() -> OrderedTree<char> {
    common::init_test_setup();
    let mut tree = OrderedTree::new();
    let mut root = tree.insert('a');
    {
        let mut b = root.insert('b');
        b.insert('e');
        b.insert('f');
    }
    root.insert('c');
    root.insert('d').insert('g').insert('h');
    tree
}

fn collect<'a>(iter: impl Iterator<Item = &'a char>) -> String {
    iter.collect()
}

#[rstest]
fn test_shape(letters: OrderedTree<char>) {
    assert_eq!(letters.len(), 8);
    assert_eq!(letters.depth(), 4);
    assert_eq!(collect(letters.iter()), "abcdefgh");
    assert_eq!(collect(letters.pre_order()), "abefcdgh");
    assert_eq!(collect(letters.post_order()), "efbchgda");
}

#[rstest]
#[case(0, 'b')]
#[case(1, 'c')]
#[case(2, 'd')]
fn test_child_positions(letters: OrderedTree<char>, #[case] position: usize, #[case] value: char) {
    let child = letters.root().unwrap().child(position).unwrap();
    assert_eq!(*child.value(), value);
    assert_eq!(child.position(), Some(position));
}

#[rstest]
#[case(3)]
#[case(100)]
fn test_out_of_range(mut letters: OrderedTree<char>, #[case] position: usize) {
    let expected = Error::OutOfRange { position, len: 3 };
    assert_eq!(letters.root().unwrap().child(position).unwrap_err(), expected);
    let mut root = letters.root_mut().unwrap();
    assert_eq!(root.erase_child_at(&position).unwrap_err(), expected);
    assert_eq!(letters.len(), 8);
}

#[rstest]
fn test_erasing_deepest_branch_lowers_depth(mut letters: OrderedTree<char>) {
    let mut root = letters.root_mut().unwrap();
    assert_eq!(root.erase_child_at(&2), Ok(3));
    assert_eq!(letters.depth(), 3);
    assert_eq!(letters.len(), 5);
    assert_eq!(collect(letters.iter()), "abcef");

    let mut root = letters.root_mut().unwrap();
    let mut b = root.child_mut(0).unwrap();
    assert_eq!(b.erase_children(), 2);
    assert!(b.is_leaf());
    assert_eq!(letters.depth(), 2);
    assert_eq!(collect(letters.iter()), "abc");
}

#[rstest]
fn test_handles_survive_sibling_erase(mut letters: OrderedTree<char>) {
    let d = letters.root().unwrap().child(2).unwrap().into_raw_key();
    letters.root_mut().unwrap().erase_child_at(&0).unwrap();
    let d = letters.get(&d).unwrap();
    assert_eq!(*d.value(), 'd');
    assert_eq!(d.position(), Some(1));
}

#[rstest]
fn test_parent_of_root(letters: OrderedTree<char>) {
    let root = letters.root().unwrap();
    assert_eq!(
        root.parent().unwrap_err(),
        Error::InvalidOperation("the root node has no parent"),
    );
    assert_eq!(root.position(), None);
    assert_eq!(root.height(), 4);
}

#[rstest]
fn test_walk_up_from_leaf(mut letters: OrderedTree<char>) {
    let h = letters
        .root()
        .and_then(|root| root.child(2))
        .and_then(|d| d.child(0))
        .and_then(|g| g.child(0))
        .unwrap()
        .into_raw_key();
    let mut node = letters.get_mut(&h).unwrap();
    assert_eq!(node.set_value('H'), 'h');
    let mut parent = node.parent_mut().unwrap();
    *parent.value_mut() = 'G';
    assert_eq!(collect(letters.iter()), "abcdefGH");
}
