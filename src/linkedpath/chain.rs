use std::num::NonZeroUsize;

use crate::path::Direction;

/// Index of an edge-link in a [`Chain`].
///
/// This index is 1-based, with 0 denoting the absence of an edge, as
/// is the case before the head and after the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct EdgeLinkIx(Option<NonZeroUsize>);

impl EdgeLinkIx {
    /// Construct an `EdgeLinkIx` from a 0-based index, shifting it
    /// into the 1-based index. The result is never null.
    #[inline]
    fn from_zero_based(ix: usize) -> Self {
        Self(NonZeroUsize::new(ix + 1))
    }

    /// The 0-based index into the edge-links, or `None` if null.
    #[inline]
    fn to_zero_based(self) -> Option<usize> {
        self.0.map(|u| u.get() - 1)
    }

    #[inline]
    fn null() -> Self {
        Self(None)
    }
}

/// A node together with the edges on either side of it.
#[derive(Debug, Clone)]
struct NodeLink<N> {
    node: N,
    prev: EdgeLinkIx,
    next: EdgeLinkIx,
}

impl<N> NodeLink<N> {
    #[inline]
    fn unlinked(node: N) -> Self {
        Self {
            node,
            prev: EdgeLinkIx::null(),
            next: EdgeLinkIx::null(),
        }
    }

    #[inline]
    fn link(&self, direction: Direction) -> EdgeLinkIx {
        match direction {
            Direction::FromHead => self.next,
            Direction::FromTail => self.prev,
        }
    }
}

/// An edge together with the nodes it joins. An edge always sits
/// between two nodes, so both links are plain 0-based node indices.
#[derive(Debug, Clone)]
struct EdgeLink<E> {
    edge: E,
    prev: usize,
    next: usize,
}

impl<E> EdgeLink<E> {
    #[inline]
    fn link(&self, direction: Direction) -> usize {
        match direction {
            Direction::FromHead => self.next,
            Direction::FromTail => self.prev,
        }
    }
}

/// A doubly linked chain of alternating node- and edge-links, stored
/// in two arenas and addressed by index.
///
/// Links are only ever added, and the arenas are only emptied as a
/// whole by `reset`, so every edge-link in the arena is part of the
/// chain and the edge count is the length of `edges`. The arena order
/// is the insertion order, not the path order.
#[derive(Debug, Clone)]
pub(super) struct Chain<N, E> {
    nodes: Vec<NodeLink<N>>,
    edges: Vec<EdgeLink<E>>,
    head: usize,
    tail: usize,
}

impl<N, E> Chain<N, E> {
    pub(super) fn new(node: N) -> Self {
        Self {
            nodes: vec![NodeLink::unlinked(node)],
            edges: Vec::new(),
            head: 0,
            tail: 0,
        }
    }

    #[inline]
    pub(super) fn head(&self) -> &N {
        &self.nodes[self.head].node
    }

    #[inline]
    pub(super) fn tail(&self) -> &N {
        &self.nodes[self.tail].node
    }

    #[inline]
    pub(super) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub(super) fn end_ix(&self, direction: Direction) -> usize {
        match direction {
            Direction::FromHead => self.head,
            Direction::FromTail => self.tail,
        }
    }

    pub(super) fn reserve(&mut self, edges: usize) {
        self.nodes.reserve(edges);
        self.edges.reserve(edges);
    }

    pub(super) fn push_back(&mut self, edge: E, node: N) {
        let node_ix = self.nodes.len();
        let edge_ix = EdgeLinkIx::from_zero_based(self.edges.len());

        self.edges.push(EdgeLink {
            edge,
            prev: self.tail,
            next: node_ix,
        });
        self.nodes.push(NodeLink {
            node,
            prev: edge_ix,
            next: EdgeLinkIx::null(),
        });
        self.nodes[self.tail].next = edge_ix;
        self.tail = node_ix;
    }

    pub(super) fn push_front(&mut self, node: N, edge: E) {
        let node_ix = self.nodes.len();
        let edge_ix = EdgeLinkIx::from_zero_based(self.edges.len());

        self.edges.push(EdgeLink {
            edge,
            prev: node_ix,
            next: self.head,
        });
        self.nodes.push(NodeLink {
            node,
            prev: EdgeLinkIx::null(),
            next: edge_ix,
        });
        self.nodes[self.head].prev = edge_ix;
        self.head = node_ix;
    }

    pub(super) fn reset(&mut self, node: N) {
        self.nodes.clear();
        self.edges.clear();
        self.nodes.push(NodeLink::unlinked(node));
        self.head = 0;
        self.tail = 0;
    }

    /// Follow the links from the node at `node_ix` to the next edge
    /// and node in `direction`, returning the edge and the index of
    /// the node past it.
    #[inline]
    fn step(
        &self,
        node_ix: usize,
        direction: Direction,
    ) -> Option<(&E, usize)> {
        let edge_ix = self.nodes[node_ix].link(direction).to_zero_based()?;
        let edge_link = &self.edges[edge_ix];
        Some((&edge_link.edge, edge_link.link(direction)))
    }
}

/// Iterator over the `(edge, node)` pairs of a linked path, walking
/// the links from one end.
pub struct LinkedPairs<'a, N, E> {
    chain: &'a Chain<N, E>,
    direction: Direction,
    cursor: usize,
    remaining: usize,
}

impl<'a, N, E> LinkedPairs<'a, N, E> {
    pub(super) fn new(chain: &'a Chain<N, E>, direction: Direction) -> Self {
        Self {
            chain,
            direction,
            cursor: chain.end_ix(direction),
            remaining: chain.edge_count(),
        }
    }
}

impl<'a, N, E> Iterator for LinkedPairs<'a, N, E> {
    type Item = (&'a E, &'a N);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let chain = self.chain;
        let step = chain.step(self.cursor, self.direction);
        debug_assert!(
            step.is_some(),
            "chain ended with {} pairs remaining",
            self.remaining
        );
        let (edge, node_ix) = step?;
        self.cursor = node_ix;
        self.remaining -= 1;
        Some((edge, &chain.nodes[node_ix].node))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, N, E> ExactSizeIterator for LinkedPairs<'a, N, E> {}
