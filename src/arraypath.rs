/*!
A path stored as one contiguous vector of `(edge, node)` cells.

The first cell has no edge; every other cell holds the edge leading
into its node from the previous cell. Head and tail access are O(1),
appending is amortized O(1), and prepending is O(n) since every cell
is shifted.
*/

use log::trace;

use crate::builder::PathBuilder;
use crate::path::{Direction, Path};

#[derive(Debug, Clone)]
struct Cell<N, E> {
    edge: Option<E>,
    node: N,
}

impl<N, E> Cell<N, E> {
    #[inline]
    fn headless(node: N) -> Self {
        Cell { edge: None, node }
    }
}

/// An immutable path backed by a single vector.
#[derive(Clone)]
pub struct ArrayPath<N, E> {
    cells: Vec<Cell<N, E>>,
}

crate::impl_path_value_traits!(ArrayPath);

impl<N, E> ArrayPath<N, E> {
    /// A path consisting of a single node.
    pub fn new(node: N) -> Self {
        Self {
            cells: vec![Cell::headless(node)],
        }
    }

    pub fn builder(node: N) -> ArrayPathBuilder<N, E> {
        ArrayPathBuilder::new(node)
    }

    /// Start a builder holding a copy of `base`, which can be of any
    /// representation.
    pub fn builder_from_path<P>(base: &P) -> ArrayPathBuilder<N, E>
    where
        P: Path<Node = N, Edge = E>,
        N: Clone,
        E: Clone,
    {
        let mut builder = ArrayPathBuilder::new(base.head().clone());
        builder.cells.reserve(base.edge_count());
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

impl<N, E> Path for ArrayPath<N, E> {
    type Node = N;
    type Edge = E;
    type Builder = ArrayPathBuilder<N, E>;
    type Pairs<'a> = ArrayPairs<'a, N, E> where Self: 'a;

    #[inline]
    fn head(&self) -> &N {
        &self.cells[0].node
    }

    #[inline]
    fn tail(&self) -> &N {
        &self.cells[self.cells.len() - 1].node
    }

    #[inline]
    fn pairs(&self, direction: Direction) -> ArrayPairs<'_, N, E> {
        ArrayPairs::new(&self.cells, direction)
    }

    #[inline]
    fn builder_from_node(&self, node: N) -> ArrayPathBuilder<N, E> {
        ArrayPathBuilder::new(node)
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.cells.len()
    }
}

/// Iterator over the `(edge, node)` pairs of an [`ArrayPath`].
///
/// From the head, cell `i` yields its own edge and node; from the
/// tail, cell `i` yields its edge paired with the node of cell `i - 1`.
pub struct ArrayPairs<'a, N, E> {
    cells: &'a [Cell<N, E>],
    direction: Direction,
    // Cell indices still to visit, `front..back`; cell 0 is never
    // visited itself as it has no edge.
    front: usize,
    back: usize,
}

impl<'a, N, E> ArrayPairs<'a, N, E> {
    fn new(cells: &'a [Cell<N, E>], direction: Direction) -> Self {
        Self {
            cells,
            direction,
            front: 1,
            back: cells.len(),
        }
    }
}

impl<'a, N, E> Iterator for ArrayPairs<'a, N, E> {
    type Item = (&'a E, &'a N);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let cells = self.cells;
        match self.direction {
            Direction::FromHead => {
                let cell = &cells[self.front];
                self.front += 1;
                debug_assert!(cell.edge.is_some(), "edgeless cell past head");
                Some((cell.edge.as_ref()?, &cell.node))
            }
            Direction::FromTail => {
                self.back -= 1;
                let cell = &cells[self.back];
                debug_assert!(cell.edge.is_some(), "edgeless cell past head");
                let edge = cell.edge.as_ref()?;
                Some((edge, &cells[self.back - 1].node))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back.saturating_sub(self.front);
        (len, Some(len))
    }
}

impl<'a, N, E> ExactSizeIterator for ArrayPairs<'a, N, E> {}

/// Builder for [`ArrayPath`], operating on its own vector of cells.
#[derive(Debug, Clone)]
pub struct ArrayPathBuilder<N, E> {
    cells: Vec<Cell<N, E>>,
}

impl<N, E> ArrayPathBuilder<N, E> {
    pub fn new(node: N) -> Self {
        Self {
            cells: vec![Cell::headless(node)],
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.cells.len()
    }
}

impl<N, E> PathBuilder for ArrayPathBuilder<N, E> {
    type Node = N;
    type Edge = E;
    type Path = ArrayPath<N, E>;

    #[inline]
    fn head(&self) -> &N {
        &self.cells[0].node
    }

    #[inline]
    fn tail(&self) -> &N {
        &self.cells[self.cells.len() - 1].node
    }

    fn push_back(&mut self, edge: E, node: N) -> &mut Self {
        self.cells.push(Cell {
            edge: Some(edge),
            node,
        });
        self
    }

    fn push_front(&mut self, node: N, edge: E) -> &mut Self {
        // the old head cell takes the new edge, and a fresh headless
        // cell goes in front of it
        self.cells[0].edge = Some(edge);
        self.cells.insert(0, Cell::headless(node));
        self
    }

    fn reset(&mut self, node: N) -> &mut Self {
        trace!(
            "resetting array path builder, {} nodes dropped",
            self.cells.len()
        );
        self.cells.clear();
        self.cells.push(Cell::headless(node));
        self
    }

    fn build(self) -> ArrayPath<N, E> {
        ArrayPath { cells: self.cells }
    }
}
