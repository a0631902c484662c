/*!
Immutable paths of alternating nodes and edges.

# Overview

A path is a sequence `node, edge, node, ..., edge, node`: never empty,
and always holding exactly one more node than edges. Nodes and edges
are arbitrary caller-supplied types.

The [`Path`](path::Path) trait is the read-only interface every path
representation provides, and [`PathBuilder`](builder::PathBuilder) is
the mutable staging area used to construct one. There are currently
two representations that implement them:

* [`ArrayPath`](arraypath::ArrayPath) keeps everything in a single
  vector. Prepending is O(n).
* [`LinkedPath`](linkedpath::LinkedPath) keeps a doubly linked chain of
  node- and edge-links. Appending and prepending are both O(1).

Both behave identically as far as traversal order, equality, hashing,
string form and sub-path indexing go, and a path of one representation
compares equal to the other if they hold the same sequence.

# Algorithms

The sub-path search family (`first_index_of_sub_path`, `starts_with`,
...) and grouped traversal are default methods of `Path`. The
[`algorithms`] module builds on them to squash runs of equal nodes into
single nodes, and to expand nodes into whole sub-paths.

# Misc.

* [`equality`] has helpers for the node equality predicates used by
  grouping
* [`error`] defines the errors returned by fallible operations
*/

pub mod path;
pub mod builder;

pub mod arraypath;
pub mod linkedpath;

pub mod algorithms;
pub mod equality;
pub mod error;

pub use crate::{
    arraypath::{ArrayPath, ArrayPathBuilder},
    builder::PathBuilder,
    error::{PathError, PathResult},
    linkedpath::{LinkedPath, LinkedPathBuilder},
    path::{Direction, Path},
};
