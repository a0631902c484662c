use std::ops::Range;

use super::Path;

/// The nodes and edges of a path, borrowed into slices so that any
/// window can be compared without rebuilding a sub-path.
struct Flattened<'a, N, E> {
    nodes: Vec<&'a N>,
    edges: Vec<&'a E>,
}

impl<'a, N, E> Flattened<'a, N, E> {
    fn new<P>(path: &'a P) -> Self
    where
        P: Path<Node = N, Edge = E>,
    {
        let mut nodes = Vec::with_capacity(path.node_count());
        let mut edges = Vec::with_capacity(path.edge_count());
        nodes.push(path.head());
        for (edge, node) in path.pairs_from_head() {
            edges.push(edge);
            nodes.push(node);
        }
        Self { nodes, edges }
    }

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Every start index at which `other` could fit.
    #[inline]
    fn offsets(&self, other: &Self) -> Range<usize> {
        if other.len() > self.len() {
            0..0
        } else {
            0..self.len() - other.len() + 1
        }
    }

    /// `true` if `other` equals the window of `self` starting at node
    /// index `start`.
    fn matches_at(&self, start: usize, other: &Self) -> bool
    where
        N: PartialEq,
        E: PartialEq,
    {
        let end = start + other.len();
        end <= self.len()
            && self.nodes[start..end] == other.nodes[..]
            && self.edges[start..end - 1] == other.edges[..]
    }
}

pub(super) fn first_index<P, Q>(path: &P, candidate: &Q) -> Option<usize>
where
    P: Path,
    Q: Path<Node = P::Node, Edge = P::Edge>,
    P::Node: PartialEq,
    P::Edge: PartialEq,
{
    let haystack = Flattened::new(path);
    let needle = Flattened::new(candidate);
    haystack
        .offsets(&needle)
        .find(|&ix| haystack.matches_at(ix, &needle))
}

pub(super) fn last_index<P, Q>(path: &P, candidate: &Q) -> Option<usize>
where
    P: Path,
    Q: Path<Node = P::Node, Edge = P::Edge>,
    P::Node: PartialEq,
    P::Edge: PartialEq,
{
    let haystack = Flattened::new(path);
    let needle = Flattened::new(candidate);
    haystack
        .offsets(&needle)
        .rev()
        .find(|&ix| haystack.matches_at(ix, &needle))
}

pub(super) fn starts_with<P, Q>(path: &P, candidate: &Q) -> bool
where
    P: Path,
    Q: Path<Node = P::Node, Edge = P::Edge>,
    P::Node: PartialEq,
    P::Edge: PartialEq,
{
    Flattened::new(path).matches_at(0, &Flattened::new(candidate))
}

pub(super) fn ends_with<P, Q>(path: &P, candidate: &Q) -> bool
where
    P: Path,
    Q: Path<Node = P::Node, Edge = P::Edge>,
    P::Node: PartialEq,
    P::Edge: PartialEq,
{
    let haystack = Flattened::new(path);
    let needle = Flattened::new(candidate);
    needle.len() <= haystack.len()
        && haystack.matches_at(haystack.len() - needle.len(), &needle)
}
