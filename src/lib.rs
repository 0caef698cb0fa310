//! # Overview
//!
//! This crate computes a generalized edit distance between two rooted trees whose children are
//! unordered, such as phylogenies. The distance is the lowest total cost of a sequence of
//! replacements, deletions and insertions of nodes that transforms one tree into the other,
//! according to a user-defined [CostMatrix].
//!
//! Children are compared in order by a dynamic program over the forests reached by removing
//! nodes from either end of each tree. Every ordering of the children of one of the trees is
//! then tried in turn, and the cheapest is kept along with its sequence of [Edit]s.
//!
//! # Example
//!
//! ```rust
//! use phylo_edit_distance::*;
//!
//! let a = LabeledTree::new(0, "root", vec![LabeledTree::leaf(1, "x"), LabeledTree::leaf(2, "y")]);
//! let b = LabeledTree::new(0, "root", vec![LabeledTree::leaf(2, "y"), LabeledTree::leaf(1, "x")]);
//!
//! // Replacing a node by a different one costs 5, inserting or deleting it costs 3.
//! let costs = CostMatrix::from_rows([
//!     [0.0, 5.0, 5.0, 3.0],
//!     [5.0, 0.0, 5.0, 3.0],
//!     [5.0, 5.0, 0.0, 3.0],
//!     [3.0, 3.0, 3.0, 0.0],
//! ])?;
//!
//! let d = diff(&a, &b, &costs)?;
//!
//! assert_eq!(d.distance, 0.0);
//! assert_eq!(d.orderings, 2);
//! assert_eq!(&*d.edits, &[
//!     Edit::Match("root", "root"),
//!     Edit::Match("y", "y"),
//!     Edit::Match("x", "x"),
//! ]);
//! # Ok::<_, Error>(())
//! ```

mod config;
mod cost;
mod diff;
mod edit;
mod error;
mod orderings;
mod tree;

pub use config::*;
pub use cost::*;
pub use diff::*;
pub use edit::*;
pub use error::*;
pub use orderings::*;
pub use tree::*;

mod boundary;
mod distance;
mod fold;
mod memoize;

pub(crate) use boundary::*;
pub(crate) use distance::*;
pub(crate) use fold::*;
pub(crate) use memoize::*;
