//! Value semantics shared by all path representations: structural
//! equality, hashing, and the string form.
//!
//! Every representation routes its `PartialEq`, `Hash`, `Display`
//! and `Debug` impls through these functions (see
//! [`impl_path_value_traits`](crate::impl_path_value_traits)), so two
//! paths holding the same sequence compare and hash the same no
//! matter how they are stored.

use std::fmt;
use std::hash::{Hash, Hasher};

use fnv::FnvHasher;

use super::Path;

const SEPARATOR: &str = ", ";

/// `true` if both paths hold equal nodes and equal edges, in order.
pub fn paths_equal<P, Q>(lhs: &P, rhs: &Q) -> bool
where
    P: Path,
    Q: Path<Node = P::Node, Edge = P::Edge>,
    P::Node: PartialEq,
    P::Edge: PartialEq,
{
    lhs.node_count() == rhs.node_count()
        && lhs.head() == rhs.head()
        && lhs.pairs_from_head().eq(rhs.pairs_from_head())
}

/// Feed the node count followed by every node and edge, from the
/// head, into `state`.
pub fn hash_path<P, H>(path: &P, state: &mut H)
where
    P: Path,
    P::Node: Hash,
    P::Edge: Hash,
    H: Hasher,
{
    state.write_u64(path.node_count() as u64);
    path.head().hash(state);
    for (edge, node) in path.pairs_from_head() {
        edge.hash(state);
        node.hash(state);
    }
}

/// A deterministic 64-bit hash of the path, equal for equal paths of
/// any representation.
pub fn fingerprint<P>(path: &P) -> u64
where
    P: Path,
    P::Node: Hash,
    P::Edge: Hash,
{
    let mut hasher = FnvHasher::default();
    hash_path(path, &mut hasher);
    hasher.finish()
}

/// Write node, edge, node, ... from the head, separated by `", "`.
pub fn write_path<P, FN, FE>(
    path: &P,
    f: &mut fmt::Formatter<'_>,
    mut write_node: FN,
    mut write_edge: FE,
) -> fmt::Result
where
    P: Path,
    FN: FnMut(&P::Node, &mut fmt::Formatter<'_>) -> fmt::Result,
    FE: FnMut(&P::Edge, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    write_node(path.head(), f)?;
    for (edge, node) in path.pairs_from_head() {
        f.write_str(SEPARATOR)?;
        write_edge(edge, f)?;
        f.write_str(SEPARATOR)?;
        write_node(node, f)?;
    }
    Ok(())
}

/// Implement `PartialEq` (against any path with the same node and
/// edge types), `Eq`, `Hash`, `Display` and `Debug` for a path type
/// with two type parameters, `<Node, Edge>`.
#[macro_export]
macro_rules! impl_path_value_traits {
    ($path:ident) => {
        impl<N, E, Q> PartialEq<Q> for $path<N, E>
        where
            Q: $crate::path::Path<Node = N, Edge = E>,
            N: PartialEq,
            E: PartialEq,
        {
            #[inline]
            fn eq(&self, other: &Q) -> bool {
                $crate::path::paths_equal(self, other)
            }
        }

        impl<N: Eq, E: Eq> Eq for $path<N, E> {}

        impl<N, E> std::hash::Hash for $path<N, E>
        where
            N: std::hash::Hash,
            E: std::hash::Hash,
        {
            #[inline]
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::path::hash_path(self, state)
            }
        }

        impl<N, E> std::fmt::Display for $path<N, E>
        where
            N: std::fmt::Display,
            E: std::fmt::Display,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::path::write_path(
                    self,
                    f,
                    |node, f| std::fmt::Display::fmt(node, f),
                    |edge, f| std::fmt::Display::fmt(edge, f),
                )
            }
        }

        impl<N, E> std::fmt::Debug for $path<N, E>
        where
            N: std::fmt::Debug,
            E: std::fmt::Debug,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(concat!(stringify!($path), "["))?;
                $crate::path::write_path(
                    self,
                    f,
                    |node, f| std::fmt::Debug::fmt(node, f),
                    |edge, f| std::fmt::Debug::fmt(edge, f),
                )?;
                f.write_str("]")
            }
        }
    };
}
