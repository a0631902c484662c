/*!
A path stored as a doubly linked chain of alternating node-links and
edge-links.

Links live in two index-addressed arenas owned by the path, and each
link records its neighbours in both directions, so walking from either
end costs O(1) per step and both appending and prepending are O(1).
Builders started from an existing path copy its content into a new
chain; no links are ever shared between paths.
*/

use log::trace;

use crate::builder::PathBuilder;
use crate::path::{Direction, Path};

mod chain;

use self::chain::Chain;
pub use self::chain::LinkedPairs;

/// An immutable path backed by a linked chain.
#[derive(Clone)]
pub struct LinkedPath<N, E> {
    chain: Chain<N, E>,
}

crate::impl_path_value_traits!(LinkedPath);

impl<N, E> LinkedPath<N, E> {
    /// A path consisting of a single node.
    pub fn new(node: N) -> Self {
        Self {
            chain: Chain::new(node),
        }
    }

    pub fn builder(node: N) -> LinkedPathBuilder<N, E> {
        LinkedPathBuilder::new(node)
    }

    /// Start a builder holding a copy of `base`, which can be of any
    /// representation.
    pub fn builder_from_path<P>(base: &P) -> LinkedPathBuilder<N, E>
    where
        P: Path<Node = N, Edge = E>,
        N: Clone,
        E: Clone,
    {
        let mut builder = LinkedPathBuilder::new(base.head().clone());
        builder.chain.reserve(base.edge_count());
        for (edge, node) in base.pairs_from_head() {
            builder.push_back(edge.clone(), node.clone());
        }
        builder
    }

    /// The path `first`, followed by `joiner`, followed by `second`.
    pub fn concatenate<P, Q>(first: &P, joiner: E, second: &Q) -> Self
    where
        P: Path<Node = N, Edge = E>,
        Q: Path<Node = N, Edge = E>,
        N: Clone,
        E: Clone,
    {
        let mut builder = Self::builder_from_path(first);
        builder.push_back_path(joiner, second);
        builder.build()
    }
}

impl<N, E> Path for LinkedPath<N, E> {
    type Node = N;
    type Edge = E;
    type Builder = LinkedPathBuilder<N, E>;
    type Pairs<'a> = LinkedPairs<'a, N, E> where Self: 'a;

    #[inline]
    fn head(&self) -> &N {
        self.chain.head()
    }

    #[inline]
    fn tail(&self) -> &N {
        self.chain.tail()
    }

    #[inline]
    fn pairs(&self, direction: Direction) -> LinkedPairs<'_, N, E> {
        LinkedPairs::new(&self.chain, direction)
    }

    #[inline]
    fn builder_from_node(&self, node: N) -> LinkedPathBuilder<N, E> {
        LinkedPathBuilder::new(node)
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.chain.edge_count() + 1
    }
}

/// Builder for [`LinkedPath`]. Pushing at either end is O(1).
#[derive(Debug, Clone)]
pub struct LinkedPathBuilder<N, E> {
    chain: Chain<N, E>,
}

impl<N, E> LinkedPathBuilder<N, E> {
    pub fn new(node: N) -> Self {
        Self {
            chain: Chain::new(node),
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.chain.edge_count() + 1
    }
}

impl<N, E> PathBuilder for LinkedPathBuilder<N, E> {
    type Node = N;
    type Edge = E;
    type Path = LinkedPath<N, E>;

    #[inline]
    fn head(&self) -> &N {
        self.chain.head()
    }

    #[inline]
    fn tail(&self) -> &N {
        self.chain.tail()
    }

    fn push_back(&mut self, edge: E, node: N) -> &mut Self {
        self.chain.push_back(edge, node);
        self
    }

    fn push_front(&mut self, node: N, edge: E) -> &mut Self {
        self.chain.push_front(node, edge);
        self
    }

    fn reset(&mut self, node: N) -> &mut Self {
        trace!(
            "resetting linked path builder, {} nodes dropped",
            self.node_count()
        );
        self.chain.reset(node);
        self
    }

    fn build(self) -> LinkedPath<N, E> {
        LinkedPath { chain: self.chain }
    }
}
