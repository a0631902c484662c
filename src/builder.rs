use crate::path::{Direction, Path};

/// A mutable staging area for constructing a path.
///
/// A builder always holds at least one node. It is consumed by
/// [`build`](PathBuilder::build), so it cannot be touched again once
/// its path exists.
pub trait PathBuilder: Sized {
    type Node;
    type Edge;

    /// The immutable path this builder finalizes into.
    type Path: Path<Node = Self::Node, Edge = Self::Edge>;

    fn head(&self) -> &Self::Node;

    fn tail(&self) -> &Self::Node;

    /// Append `edge` and `node` at the tail; `node` becomes the tail.
    fn push_back(&mut self, edge: Self::Edge, node: Self::Node) -> &mut Self;

    /// Prepend `node` and `edge` at the head; `node` becomes the head
    /// and `edge` joins it to the previous head.
    fn push_front(&mut self, node: Self::Node, edge: Self::Edge) -> &mut Self;

    /// Discard all content, leaving only `node`.
    fn reset(&mut self, node: Self::Node) -> &mut Self;

    fn build(self) -> Self::Path;

    #[inline]
    fn end(&self, direction: Direction) -> &Self::Node {
        match direction {
            Direction::FromHead => self.head(),
            Direction::FromTail => self.tail(),
        }
    }

    /// Append all of `path` at the tail, joined by `edge`.
    fn push_back_path<P>(&mut self, edge: Self::Edge, path: &P) -> &mut Self
    where
        P: Path<Node = Self::Node, Edge = Self::Edge>,
        Self::Node: Clone,
        Self::Edge: Clone,
    {
        self.push_back(edge, path.head().clone());
        for (edge, node) in path.pairs_from_head() {
            self.push_back(edge.clone(), node.clone());
        }
        self
    }

    /// Prepend all of `path` at the head, joined by `edge`. The order
    /// of `path` is kept, so its head becomes the new head.
    fn push_front_path<P>(&mut self, path: &P, edge: Self::Edge) -> &mut Self
    where
        P: Path<Node = Self::Node, Edge = Self::Edge>,
        Self::Node: Clone,
        Self::Edge: Clone,
    {
        self.push_front(path.tail().clone(), edge);
        for (edge, node) in path.pairs_from_tail() {
            self.push_front(node.clone(), edge.clone());
        }
        self
    }
}
