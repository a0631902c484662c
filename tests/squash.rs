use edgepath::{
    algorithms::{expand_nodes, squash_nodes},
    equality, ArrayPath, LinkedPath, Path, PathBuilder,
};

fn test_path(
    head: &'static str,
    rest: &[(i32, &'static str)],
) -> LinkedPath<&'static str, i32> {
    let mut builder = LinkedPath::builder(head);
    for &(edge, node) in rest {
        builder.push_back(edge, node);
    }
    builder.build()
}

fn test_path_squashed(
    head: Vec<&'static str>,
    rest: Vec<(i64, Vec<&'static str>)>,
) -> LinkedPath<Vec<String>, i64> {
    let owned = |parts: Vec<&str>| {
        parts.into_iter().map(String::from).collect::<Vec<_>>()
    };
    let mut builder = LinkedPath::builder(owned(head));
    for (edge, node) in rest {
        builder.push_back(edge, owned(node));
    }
    builder.build()
}

/// Every node and edge of `path`, from the head, as strings.
fn read_all<P>(path: &P) -> Vec<String>
where
    P: Path,
    P::Node: ToString,
    P::Edge: ToString,
{
    let mut all = vec![path.head().to_string()];
    for (edge, node) in path.pairs_from_head() {
        all.push(edge.to_string());
        all.push(node.to_string());
    }
    all
}

/// Parse a flattened `node, edge, node, ...` list back into a path.
fn from_parts(parts: &[String]) -> LinkedPath<String, i32> {
    let mut builder = LinkedPath::builder(parts[0].clone());
    for pair in parts[1..].chunks(2) {
        builder.push_back(pair[0].parse().unwrap(), pair[1].clone());
    }
    builder.build()
}

#[test]
fn squash_nodes_combines_chosen_nodes() {
    let path = test_path("a1", &[(1, "a2"), (2, "b")]);

    let squashed = squash_nodes(
        &path,
        equality::by_key(|node: &&str| node.chars().next()),
        |group| read_all(&group),
        |edge| i64::from(*edge),
    )
    .unwrap();

    assert_eq!(
        squashed,
        test_path_squashed(vec!["a1", "1", "a2"], vec![(2, vec!["b"])])
    );
    assert_eq!(squashed.node_count(), 2);
}

#[test]
fn squash_works_over_array_paths() {
    let mut builder = ArrayPath::builder("a1");
    builder.push_back(1, "a2").push_back(2, "b");
    let path = builder.build();

    let squashed = squash_nodes(
        &path,
        equality::by_key(|node: &&str| node.chars().next()),
        |group: ArrayPath<&str, i32>| read_all(&group),
        |edge| i64::from(*edge),
    )
    .unwrap();

    assert_eq!(
        squashed,
        test_path_squashed(vec!["a1", "1", "a2"], vec![(2, vec!["b"])])
    );
}

#[test]
fn squash_everything_into_one_node() {
    let path = test_path("x", &[(1, "x"), (2, "x")]);

    let squashed = squash_nodes(
        &path,
        equality::intrinsic,
        |group| group.node_count(),
        |edge| *edge,
    )
    .unwrap();

    assert_eq!(squashed, LinkedPath::<usize, i32>::new(3));
}

#[test]
fn expand_nodes_converts_nodes_into_larger_paths() {
    let squashed = test_path_squashed(
        vec!["a", "10", "b"],
        vec![(1, vec!["c", "20", "d", "30", "e"]), (2, vec!["f"])],
    );

    let path = expand_nodes(
        &squashed,
        |parts| from_parts(parts),
        |edge| *edge as i32,
    )
    .unwrap();

    let expected: Vec<String> = vec![
        "a", "10", "b", "1", "c", "20", "d", "30", "e", "2", "f",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    assert_eq!(read_all(&path), expected);
    assert_eq!(path.node_count(), 6);
}

#[test]
fn expand_then_squash_restores_path() {
    let path = test_path("a1", &[(1, "a2"), (2, "b1"), (3, "c1")]);

    let squashed = squash_nodes(
        &path,
        equality::by_key(|node: &&str| node.chars().next()),
        |group| read_all(&group),
        |edge| i64::from(*edge),
    )
    .unwrap();

    let expanded = expand_nodes(
        &squashed,
        |parts| from_parts(parts),
        |edge| *edge as i32,
    )
    .unwrap();

    assert_eq!(read_all(&expanded), read_all(&path));
}
