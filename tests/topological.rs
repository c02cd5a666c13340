use meridian::prelude::*;

fn assert_linear_extension<G>(g: &G, order: &[G::Vertex])
where
    G: GraphView,
{
    let position = |v: &G::Vertex| order.iter().position(|x| x == v).unwrap();
    for e in g.edges() {
        assert!(
            position(&e.source) < position(&e.target),
            "{:?} must precede {:?}",
            e.source,
            e.target
        );
    }
}

fn course_plan() -> DiGraph<&'static str, u8> {
    DiGraph::from_edges([
        ("intro", "data structures", 1),
        ("intro", "discrete math", 1),
        ("discrete math", "algorithms", 1),
        ("data structures", "algorithms", 1),
        ("algorithms", "compilers", 1),
        ("data structures", "databases", 1),
    ])
}

#[test]
fn both_sorters_produce_linear_extensions() {
    let g = course_plan();

    let k = kahn(&g).unwrap().into_result().unwrap();
    assert_eq!(k.len(), 6);
    assert_linear_extension(&g, &k);

    let d = dfs_order(&g).unwrap().into_result().unwrap();
    assert_eq!(d.len(), 6);
    assert_linear_extension(&g, &d);
}

#[test]
fn cyclic_graph_is_reported_by_both_sorters() {
    let g = DiMatrix::<char, u8>::from_edges([('A', 'B', 1), ('B', 'C', 1), ('C', 'A', 1)]);
    assert!(has_cycle_directed(&g));

    let k = kahn(&g).unwrap();
    assert!(k.order().len() < 3);
    assert!(!k.is_complete());

    let d = dfs_order(&g).unwrap();
    assert!(!d.is_complete());
    assert_eq!(
        d.into_result(),
        Err(GraphError::CycleDetected { ordered: 0, total: 3 })
    );
}

#[test]
fn cycle_behind_a_prefix_keeps_partial_order() {
    let g = DiGraph::<u8, u8>::from_edges([(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 2, 1)]);
    let k = kahn(&g).unwrap();
    assert_eq!(k.order(), &[0, 1]);
    assert!(matches!(
        k.into_result(),
        Err(GraphError::CycleDetected { ordered: 2, total: 4 })
    ));
}

#[test]
fn enumerated_orders_are_all_valid() {
    let g = course_plan();
    let orders = all_orders(&g, 1000).unwrap();
    assert!(!orders.is_empty());
    for order in &orders {
        assert_linear_extension(&g, order);
    }
    let mut unique = orders.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), orders.len());
}

#[test]
fn longest_paths_on_the_course_plan() {
    let g = course_plan();
    let lengths = longest_path_lengths(&g).unwrap();
    let get = |v: &str| lengths.iter().find(|(x, _)| *x == v).map(|(_, n)| *n);
    assert_eq!(get("intro"), Some(3));
    assert_eq!(get("data structures"), Some(2));
    assert_eq!(get("compilers"), Some(0));
}

#[test]
fn undirected_input_is_rejected() {
    let g = UnGraph::<u8, u8>::from_edges([(0, 1, 1)]);
    assert_eq!(kahn(&g).unwrap_err(), GraphError::RequiresDirected);
    assert_eq!(dfs_order(&g).unwrap_err(), GraphError::RequiresDirected);
    assert_eq!(longest_path_lengths(&g).unwrap_err(), GraphError::RequiresDirected);
}
