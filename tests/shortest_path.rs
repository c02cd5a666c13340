use std::collections::HashMap;

use meridian::prelude::*;

const EDGES: [(char, char, u32); 7] = [
    ('A', 'B', 4),
    ('A', 'C', 2),
    ('B', 'C', 1),
    ('B', 'D', 5),
    ('C', 'D', 8),
    ('C', 'E', 10),
    ('D', 'E', 2),
];

#[test]
fn reference_distance_table() {
    let g = DiGraph::from_edges(EDGES);
    let paths = dijkstra(&g, &'A').unwrap();

    let expected: HashMap<char, Option<u32>> = [
        ('A', Some(0)),
        ('B', Some(4)),
        ('C', Some(2)),
        ('D', Some(9)),
        ('E', Some(11)),
    ]
    .into_iter()
    .collect();
    assert_eq!(paths.to_distance_map(), expected);

    // A->B->D->E (11) beats every route through C: A->C->E (12), A->C->D->E (12).
    assert_eq!(paths.path_to(&'E'), Some(vec![&'A', &'B', &'D', &'E']));
    assert!(paths.distance(&'E') < Some(2 + 10));
}

#[test]
fn every_solver_agrees_on_the_reference_graph() {
    let list = DiGraph::from_edges(EDGES);
    let matrix = DiMatrix::from_edges(EDGES);

    let dj = dijkstra(&list, &'A').unwrap().to_distance_map();
    let dj_matrix = dijkstra(&matrix, &'A').unwrap().to_distance_map();
    let bf = bellman_ford(&list, &'A').unwrap().into_result().unwrap().to_distance_map();
    let fw = floyd_warshall(&matrix).into_checked().unwrap();

    assert_eq!(dj, dj_matrix);
    assert_eq!(dj, bf);
    for (v, d) in &dj {
        assert_eq!(fw.distance(&'A', v), *d, "floyd-warshall A -> {v}");
    }

    let (path, cost) = a_star(&list, &'A', &'E', |_| 0).unwrap().unwrap();
    assert_eq!(cost, 11);
    assert_eq!(path, vec!['A', 'B', 'D', 'E']);
}

#[test]
fn negative_cycle_is_an_explicit_failure() {
    let mut g = DiGraph::<&str, i64>::from_edges([("s", "a", 2), ("a", "b", 3), ("b", "c", -1)]);
    assert!(!bellman_ford(&g, &"s").unwrap().has_negative_cycle());

    g.add_edge("c", "a", -4);
    let run = bellman_ford(&g, &"s").unwrap();
    assert!(run.has_negative_cycle());
    let err = run.into_result().unwrap_err();
    assert!(matches!(err, GraphError::NegativeCycle { ref vertices } if vertices.len() == 3));

    let all = floyd_warshall(&g);
    assert!(all.has_negative_cycle());
    let mut on_cycle = all.negative_cycle_vertices();
    on_cycle.sort_unstable();
    assert_eq!(on_cycle, vec!["a", "b", "c"]);
    assert!(all.into_checked().is_err());
}

#[test]
fn unreachable_and_unknown_vertices() {
    let mut g = DiGraph::from_edges(EDGES);
    g.add_vertex('Z');

    let paths = dijkstra(&g, &'A').unwrap();
    assert_eq!(paths.distance(&'Z'), None);
    assert_eq!(paths.path_to(&'Z'), None);

    let all = floyd_warshall(&g);
    assert_eq!(all.distance(&'A', &'Z'), None);
    assert_eq!(all.distance(&'Z', &'Z'), Some(0));

    assert!(matches!(dijkstra(&g, &'Q'), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(bellman_ford(&g, &'Q'), Err(GraphError::UnknownVertex(_))));
    assert!(matches!(a_star(&g, &'A', &'Q', |_| 0), Err(GraphError::UnknownVertex(_))));
}

#[test]
fn all_pairs_dijkstra_matches_floyd_warshall() {
    let g = UnMatrix::from_edges(EDGES);
    let fw = floyd_warshall(&g);
    for run in all_pairs_dijkstra(&g) {
        let s = *run.source();
        for (t, d) in run.distances() {
            assert_eq!(fw.distance(&s, t), d, "{s} -> {t}");
        }
    }
}
