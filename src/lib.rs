//! Implements arena-allocated multiway trees with pluggable child storage.
//!
//! # Overview
//! A [`MultiwayTree`] is a single root-anchored hierarchy of nodes, each holding a value and any number of children. Like the rest of the arena-tree family (see Ben Lovy's ["arena-allocated trees"][arena tree blog post]), the nodes do not point at each other: every node lives in one backing arena and links to its parent and children through arena keys. The parent link is lookup-only, so the whole structure is owned by the tree alone and can never form cycles.
//!
//! How a node stores its children is chosen once per tree through a type parameter:
//! - [`Ordered`]: children in insertion order, addressed by position;
//! - [`Keyed`]: children addressed by a key which is unique among siblings, with insert-or-replace semantics.
//!
//! The tree keeps its total node count and its depth up to date as nodes are inserted and erased, so both are available in constant time.
//!
//! # Example
//! ```rust
//! use multiway::{KeyedTree, Traversable};
//!
//! let mut tree = KeyedTree::<i32>::new();
//! let mut root = tree.insert(2);
//! root.insert("0".to_string(), 3);
//! root.insert("1".to_string(), 5);
//! root.child_mut("0").unwrap().insert("0".to_string(), 7);
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 3, 5, 7]);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [2, 3, 7, 5]);
//!
//! tree.root_mut().unwrap().child_mut("0").unwrap().erase();
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.depth(), 2);
//! ```
//!
//! # Storage
//! The arena is abstracted by the [`Storage`] trait. By default a [`SlotMap`] with generational keys is used, which means that handles to erased nodes are reliably detected as stale. [`DenseSlotMap`] is supported as well.
//!
//! # Logging
//! Structural changes emit [`tracing`] events: `debug` for whole-tree changes such as replacing the root or clearing, `trace` for individual nodes being attached or erased. The crate never installs a subscriber.
//!
//! # Feature flags
//! - `slab`: adds a `Storage` implementation for [`Slab`]. Slab keys get reused, so stale handles may point at newer nodes.
//! - `doc_cfg`: documentation annotations for feature-gated items. **Requires a nightly compiler.**
//!
//! [`MultiwayTree`]: multiway_tree/struct.MultiwayTree.html " "
//! [`Ordered`]: children/struct.Ordered.html " "
//! [`Keyed`]: children/struct.Keyed.html " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "
//! [`Slab`]: https://docs.rs/slab/*/slab/struct.Slab.html " "
//! [`tracing`]: https://docs.rs/tracing " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage, NodeKey};

pub mod children;
#[doc(no_inline)]
pub use children::{ChildStorage, Ordered, Keyed};

pub mod multiway_tree;
pub use multiway_tree::{MultiwayTree, OrderedTree, KeyedTree};
#[cfg(feature = "slab")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slab")))]
pub use multiway_tree::{SlabOrderedTree, SlabKeyedTree};

pub mod traversal;
pub use traversal::Traversable;

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
        NodeKey as TreeNodeKey,
    };
    #[doc(no_inline)]
    pub use crate::children::{
        ChildStorage,
        Ordered as OrderedChildren,
        Keyed as KeyedChildren,
    };
    #[doc(no_inline)]
    pub use crate::multiway_tree::{
        MultiwayTree,
        OrderedTree,
        KeyedTree,
        NodeRef as MultiwayTreeNodeRef,
        NodeRefMut as MultiwayTreeNodeRefMut,
    };
    #[doc(no_inline)]
    pub use crate::traversal::Traversable;
    #[doc(no_inline)]
    pub use crate::Error as TreeError;
}

/// The error type returned by fallible tree operations.
///
/// A failed operation never leaves a partial change behind: the tree is exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The operation requires a non-empty tree, but the tree is empty.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    /// The operation makes no sense for the node it was called on, such as asking the root for its parent or erasing a node through a stale handle.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    /// A keyed lookup addressed a key which no child is stored under. Contains the `Debug` representation of the key.
    #[error("no child is stored under the key {key}")]
    NotFound {
        /// The key which was looked up.
        key: String,
    },
    /// A positional lookup addressed a position past the last child.
    #[error("position {position} is out of range for a node with {len} children")]
    OutOfRange {
        /// The position which was looked up.
        position: usize,
        /// The number of children the node had.
        len: usize,
    },
}
