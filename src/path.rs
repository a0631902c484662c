use num_traits::PrimInt;

use crate::builder::PathBuilder;
use crate::error::{PathError, PathResult};

mod search;
mod value;

pub use self::value::{fingerprint, hash_path, paths_equal, write_path};

/// The end of a path a traversal starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    FromHead,
    FromTail,
}

impl Direction {
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Direction::FromHead => Direction::FromTail,
            Direction::FromTail => Direction::FromHead,
        }
    }
}

/// A single node or edge met while walking a path.
#[derive(Debug, PartialEq, Eq)]
pub enum Element<'a, N, E> {
    Node(&'a N),
    Edge(&'a E),
}

impl<'a, N, E> Clone for Element<'a, N, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, N, E> Copy for Element<'a, N, E> {}

/// Iterator over every node and edge of a path, alternating node,
/// edge, node, and both starting and ending on a node.
pub struct Elements<'a, P: Path + 'a> {
    pending: Option<&'a P::Node>,
    pairs: P::Pairs<'a>,
}

impl<'a, P: Path + 'a> Iterator for Elements<'a, P> {
    type Item = Element<'a, P::Node, P::Edge>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.pending.take() {
            return Some(Element::Node(node));
        }
        let (edge, node) = self.pairs.next()?;
        self.pending = Some(node);
        Some(Element::Edge(edge))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.pairs.len() * 2 + self.pending.is_some() as usize;
        (len, Some(len))
    }
}

impl<'a, P: Path + 'a> ExactSizeIterator for Elements<'a, P> {}

/// The read-only interface shared by every path representation.
///
/// A path is a non-empty alternating sequence of nodes and edges,
/// always with exactly one more node than edges. Implementations only
/// provide the end nodes, the pair iterators, and a way to start a new
/// builder of the same representation; everything else is derived
/// from those, and behaves identically regardless of the
/// representation.
pub trait Path: Sized {
    type Node;
    type Edge;

    /// Builder of the same representation, finalizing into `Self`.
    type Builder: PathBuilder<
        Node = Self::Node,
        Edge = Self::Edge,
        Path = Self,
    >;

    /// Iterator over the `(edge, node)` pairs of the path, in either
    /// direction, skipping the node the traversal starts from.
    type Pairs<'a>: ExactSizeIterator<Item = (&'a Self::Edge, &'a Self::Node)>
    where
        Self: 'a;

    fn head(&self) -> &Self::Node;

    fn tail(&self) -> &Self::Node;

    /// Iterate through the `(edge, node)` pairs starting from one end.
    /// From the head this yields each edge with the node following it;
    /// from the tail, each edge with the node preceding it.
    fn pairs(&self, direction: Direction) -> Self::Pairs<'_>;

    /// Start a fresh builder of the same representation as `self`,
    /// seeded with `node`. The content of `self` is not used.
    fn builder_from_node(&self, node: Self::Node) -> Self::Builder;

    /// The node a traversal in `direction` starts from.
    #[inline]
    fn end(&self, direction: Direction) -> &Self::Node {
        match direction {
            Direction::FromHead => self.head(),
            Direction::FromTail => self.tail(),
        }
    }

    #[inline]
    fn pairs_from_head(&self) -> Self::Pairs<'_> {
        self.pairs(Direction::FromHead)
    }

    #[inline]
    fn pairs_from_tail(&self) -> Self::Pairs<'_> {
        self.pairs(Direction::FromTail)
    }

    /// Iterate through all nodes and edges starting from one end.
    fn elements(&self, direction: Direction) -> Elements<'_, Self> {
        Elements {
            pending: Some(self.end(direction)),
            pairs: self.pairs(direction),
        }
    }

    fn visit_pairs_from_head<F>(&self, mut visit: F)
    where
        F: FnMut(&Self::Edge, &Self::Node),
    {
        self.pairs_from_head().for_each(|(edge, node)| visit(edge, node));
    }

    fn visit_pairs_from_tail<F>(&self, mut visit: F)
    where
        F: FnMut(&Self::Edge, &Self::Node),
    {
        self.pairs_from_tail().for_each(|(edge, node)| visit(edge, node));
    }

    /// Visit every node and edge starting from one end. The first and
    /// the last call are both to `node_visit`.
    fn visit<FN, FE>(
        &self,
        direction: Direction,
        mut node_visit: FN,
        mut edge_visit: FE,
    ) where
        FN: FnMut(&Self::Node),
        FE: FnMut(&Self::Edge),
    {
        node_visit(self.end(direction));
        for (edge, node) in self.pairs(direction) {
            edge_visit(edge);
            node_visit(node);
        }
    }

    fn visit_from_head<FN, FE>(&self, node_visit: FN, edge_visit: FE)
    where
        FN: FnMut(&Self::Node),
        FE: FnMut(&Self::Edge),
    {
        self.visit(Direction::FromHead, node_visit, edge_visit)
    }

    fn visit_from_tail<FN, FE>(&self, node_visit: FN, edge_visit: FE)
    where
        FN: FnMut(&Self::Node),
        FE: FnMut(&Self::Edge),
    {
        self.visit(Direction::FromTail, node_visit, edge_visit)
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.pairs_from_head().len() + 1
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.node_count() - 1
    }

    fn nodes(&self, direction: Direction) -> Vec<&Self::Node> {
        let mut nodes = Vec::with_capacity(self.node_count());
        nodes.push(self.end(direction));
        nodes.extend(self.pairs(direction).map(|(_, node)| node));
        nodes
    }

    fn edges(&self, direction: Direction) -> Vec<&Self::Edge> {
        self.pairs(direction).map(|(edge, _)| edge).collect()
    }

    fn nodes_from_head(&self) -> Vec<&Self::Node> {
        self.nodes(Direction::FromHead)
    }

    fn nodes_from_tail(&self) -> Vec<&Self::Node> {
        self.nodes(Direction::FromTail)
    }

    fn edges_from_head(&self) -> Vec<&Self::Edge> {
        self.edges(Direction::FromHead)
    }

    fn edges_from_tail(&self) -> Vec<&Self::Edge> {
        self.edges(Direction::FromTail)
    }

    /// Create a builder holding a copy of this path, ready to be
    /// modified without affecting `self`.
    fn to_builder(&self) -> Self::Builder
    where
        Self::Node: Clone,
        Self::Edge: Clone,
    {
        let mut builder = self.builder_from_node(self.head().clone());
        for (edge, node) in self.pairs_from_head() {
            builder.push_back(edge.clone(), node.clone());
        }
        builder
    }

    /// Copy the nodes from `start` to `end`, both inclusive and
    /// 0-based, together with the edges between them.
    ///
    /// Indices can be of any primitive integer type. Fails if `start`
    /// is negative, `end` is less than `start`, or `end` is past the
    /// tail.
    fn sub_path<I>(&self, start: I, end: I) -> PathResult<Self>
    where
        I: PrimInt,
        Self::Node: Clone,
        Self::Edge: Clone,
    {
        let len = self.node_count();
        let (start, end) = checked_range(start, end, len)?;

        let mut pairs = self.pairs_from_head();
        let first = if start == 0 {
            self.head()
        } else {
            match pairs.nth(start - 1) {
                Some((_, node)) => node,
                None => return Err(PathError::OutOfBounds { start, end, len }),
            }
        };

        let mut builder = self.builder_from_node(first.clone());
        for (edge, node) in pairs.take(end - start) {
            builder.push_back(edge.clone(), node.clone());
        }
        Ok(builder.build())
    }

    /// The lowest node index at which `candidate` occurs as a
    /// sub-path, or `None`.
    fn first_index_of_sub_path<Q>(&self, candidate: &Q) -> Option<usize>
    where
        Q: Path<Node = Self::Node, Edge = Self::Edge>,
        Self::Node: PartialEq,
        Self::Edge: PartialEq,
    {
        search::first_index(self, candidate)
    }

    /// The highest node index at which `candidate` occurs as a
    /// sub-path, or `None`.
    fn last_index_of_sub_path<Q>(&self, candidate: &Q) -> Option<usize>
    where
        Q: Path<Node = Self::Node, Edge = Self::Edge>,
        Self::Node: PartialEq,
        Self::Edge: PartialEq,
    {
        search::last_index(self, candidate)
    }

    fn contains_sub_path<Q>(&self, candidate: &Q) -> bool
    where
        Q: Path<Node = Self::Node, Edge = Self::Edge>,
        Self::Node: PartialEq,
        Self::Edge: PartialEq,
    {
        self.first_index_of_sub_path(candidate).is_some()
    }

    fn starts_with<Q>(&self, candidate: &Q) -> bool
    where
        Q: Path<Node = Self::Node, Edge = Self::Edge>,
        Self::Node: PartialEq,
        Self::Edge: PartialEq,
    {
        search::starts_with(self, candidate)
    }

    fn ends_with<Q>(&self, candidate: &Q) -> bool
    where
        Q: Path<Node = Self::Node, Edge = Self::Edge>,
        Self::Node: PartialEq,
        Self::Edge: PartialEq,
    {
        search::ends_with(self, candidate)
    }

    /// Split the path into maximal runs of adjacent nodes that
    /// `node_eq` considers equal, walking from one end.
    ///
    /// Each run is passed to `group_visit` as a path of the same
    /// representation, and each edge joining two runs is passed to
    /// `edge_visit`, interleaved as group, edge, group, ..., group.
    /// `node_eq` is called with the node already in the current run
    /// and the next node of the traversal.
    fn visit_grouped<Q, G, V>(
        &self,
        direction: Direction,
        mut node_eq: Q,
        mut group_visit: G,
        mut edge_visit: V,
    ) where
        Q: FnMut(&Self::Node, &Self::Node) -> bool,
        G: FnMut(Self),
        V: FnMut(&Self::Edge),
        Self::Node: Clone,
        Self::Edge: Clone,
    {
        let mut group = self.builder_from_node(self.end(direction).clone());

        for (edge, node) in self.pairs(direction) {
            let adjacent = group.end(direction.reverse());
            if node_eq(adjacent, node) {
                match direction {
                    Direction::FromHead => {
                        group.push_back(edge.clone(), node.clone())
                    }
                    Direction::FromTail => {
                        group.push_front(node.clone(), edge.clone())
                    }
                };
            } else {
                let next = self.builder_from_node(node.clone());
                let finished = std::mem::replace(&mut group, next);
                group_visit(finished.build());
                edge_visit(edge);
            }
        }

        group_visit(group.build());
    }

    fn visit_grouped_from_head<Q, G, V>(
        &self,
        node_eq: Q,
        group_visit: G,
        edge_visit: V,
    ) where
        Q: FnMut(&Self::Node, &Self::Node) -> bool,
        G: FnMut(Self),
        V: FnMut(&Self::Edge),
        Self::Node: Clone,
        Self::Edge: Clone,
    {
        let direction = Direction::FromHead;
        self.visit_grouped(direction, node_eq, group_visit, edge_visit)
    }

    fn visit_grouped_from_tail<Q, G, V>(
        &self,
        node_eq: Q,
        group_visit: G,
        edge_visit: V,
    ) where
        Q: FnMut(&Self::Node, &Self::Node) -> bool,
        G: FnMut(Self),
        V: FnMut(&Self::Edge),
        Self::Node: Clone,
        Self::Edge: Clone,
    {
        let direction = Direction::FromTail;
        self.visit_grouped(direction, node_eq, group_visit, edge_visit)
    }
}

/// Validate an inclusive node range against a path of `len` nodes.
///
/// Rejected bounds are reported as `i128`; only `u128` values past
/// `i128::MAX` saturate.
fn checked_range<I: PrimInt>(
    start: I,
    end: I,
    len: usize,
) -> PathResult<(usize, usize)> {
    match (start.to_usize(), end.to_usize()) {
        (Some(start), Some(end)) if start <= end => {
            if end >= len {
                Err(PathError::OutOfBounds { start, end, len })
            } else {
                Ok((start, end))
            }
        }
        _ => Err(PathError::InvalidRange {
            start: start.to_i128().unwrap_or(i128::MAX),
            end: end.to_i128().unwrap_or(i128::MAX),
        }),
    }
}
