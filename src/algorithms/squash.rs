use crate::{
    builder::PathBuilder,
    error::{PathError, PathResult},
    linkedpath::LinkedPath,
    path::Path,
};

use log::{debug, trace};

/// Collapse each run of adjacent nodes that `node_eq` considers equal
/// into a single node.
///
/// Each run is handed to `compact` as a path of the input's own
/// representation and produces one output node; each edge between two
/// runs is passed through `convert_edge`. Edges inside a run are only
/// seen by `compact`.
pub fn squash_nodes<P, Q, C, V, N, E>(
    path: &P,
    node_eq: Q,
    mut compact: C,
    mut convert_edge: V,
) -> PathResult<LinkedPath<N, E>>
where
    P: Path,
    P::Node: Clone,
    P::Edge: Clone,
    Q: FnMut(&P::Node, &P::Node) -> bool,
    C: FnMut(P) -> N,
    V: FnMut(&P::Edge) -> E,
{
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    path.visit_grouped_from_head(
        node_eq,
        |group| nodes.push(compact(group)),
        |edge| edges.push(convert_edge(edge)),
    );

    debug!(
        "squashed {} nodes into {} groups",
        path.node_count(),
        nodes.len()
    );

    assemble_path(nodes, edges)
}

/// Replace each node with the path `expand` produces for it, joining
/// consecutive expansions with the converted original edges.
pub fn expand_nodes<P, X, R, V>(
    path: &P,
    mut expand: X,
    mut convert_edge: V,
) -> PathResult<LinkedPath<R::Node, R::Edge>>
where
    P: Path,
    X: FnMut(&P::Node) -> R,
    R: Path,
    R::Node: Clone,
    R::Edge: Clone,
    V: FnMut(&P::Edge) -> R::Edge,
{
    let mut nodes = Vec::with_capacity(path.node_count());
    let mut edges = Vec::with_capacity(path.edge_count());

    splice(&mut nodes, &mut edges, &expand(path.head()));
    for (edge, node) in path.pairs_from_head() {
        edges.push(convert_edge(edge));
        splice(&mut nodes, &mut edges, &expand(node));
    }

    debug!(
        "expanded {} nodes into {} nodes",
        path.node_count(),
        nodes.len()
    );

    assemble_path(nodes, edges)
}

/// Build a path from its nodes and edges in head-to-tail order.
///
/// Fails unless there is exactly one more node than edges.
pub fn assemble_path<N, E>(
    nodes: Vec<N>,
    edges: Vec<E>,
) -> PathResult<LinkedPath<N, E>> {
    let mismatch = PathError::ArityMismatch {
        nodes: nodes.len(),
        edges: edges.len(),
    };

    if nodes.len() != edges.len() + 1 {
        debug!("cannot assemble path: {}", mismatch);
        return Err(mismatch);
    }

    let mut nodes = nodes.into_iter();
    let head = nodes.next().ok_or(mismatch)?;

    let mut builder = LinkedPath::builder(head);
    for (edge, node) in edges.into_iter().zip(nodes) {
        builder.push_back(edge, node);
    }
    Ok(builder.build())
}

fn splice<R>(nodes: &mut Vec<R::Node>, edges: &mut Vec<R::Edge>, part: &R)
where
    R: Path,
    R::Node: Clone,
    R::Edge: Clone,
{
    trace!("splicing expansion of {} nodes", part.node_count());
    nodes.push(part.head().clone());
    for (edge, node) in part.pairs_from_head() {
        edges.push(edge.clone());
        nodes.push(node.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arraypath::ArrayPath;

    #[test]
    fn assemble_rejects_mismatched_counts() {
        assert_eq!(
            assemble_path(vec!["a", "b"], vec![1, 2]).err(),
            Some(PathError::ArityMismatch { nodes: 2, edges: 2 })
        );
        assert_eq!(
            assemble_path(Vec::<&str>::new(), Vec::<u8>::new()).err(),
            Some(PathError::ArityMismatch { nodes: 0, edges: 0 })
        );

        let path = assemble_path(vec!["a", "b"], vec![1]).unwrap();
        assert_eq!(path.to_string(), "a, 1, b");
    }

    #[test]
    fn squash_with_distinct_nodes_keeps_shape() {
        let mut builder = ArrayPath::builder(1u32);
        builder.push_back('x', 2).push_back('y', 3);
        let path = builder.build();

        let squashed = squash_nodes(
            &path,
            |a, b| a == b,
            |group: ArrayPath<u32, char>| *group.head() * 10,
            |edge| edge.to_ascii_uppercase(),
        )
        .unwrap();

        assert_eq!(squashed.to_string(), "10, X, 20, Y, 30");
    }

    #[test]
    fn expand_single_node_paths_is_conversion() {
        let mut builder = ArrayPath::builder(1u32);
        builder.push_back(5u8, 2);
        let path = builder.build();

        let expanded = expand_nodes(
            &path,
            |node| LinkedPath::<u64, u16>::new(u64::from(*node)),
            |edge| u16::from(*edge),
        )
        .unwrap();

        assert_eq!(expanded.nodes_from_head(), vec![&1u64, &2u64]);
        assert_eq!(expanded.edges_from_head(), vec![&5u16]);
    }
}
