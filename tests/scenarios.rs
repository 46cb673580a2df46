use graphlab::{
    GraphError, MatrixGraph, SparseGraph, WeightedGraph, bellman_ford, demo, dijkstra,
    floyd_warshall, mst,
    pert::{self, Task},
    search,
};

fn vertices(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn chain_shortest_path() {
    let mut graph = MatrixGraph::with_labels(["A", "B", "C"]).unwrap();
    graph.add_edge("A", "B", 2.0).unwrap();
    graph.add_edge("B", "C", 3.0).unwrap();
    let path = dijkstra::shortest_path(&graph, "A", "C").unwrap();
    assert_eq!(path.vertices(), vertices(&["A", "B", "C"]));
    assert_eq!(path.weight(), 5.0);
    assert_eq!(path.to_string(), "A -> B -> C (total 5)");
}

#[test]
fn triangle_negative_cycle() {
    let graph = MatrixGraph::new(
        ["A", "B", "C"],
        vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![-3.0, 0.0, 0.0],
        ],
    )
    .unwrap();
    match bellman_ford::shortest_paths(&graph, "A") {
        Err(GraphError::NegativeCycle(cycle)) => {
            let mut members = cycle.vertices().to_vec();
            members.sort();
            assert_eq!(members, vertices(&["A", "B", "C"]));
            assert_eq!(cycle.weight(), -1.0);
        }
        other => panic!("expected a negative cycle, got {other:?}"),
    }
    assert!(floyd_warshall::all_pairs_distances(&graph).has_negative_cycle());
}

#[test]
fn two_task_project() {
    let tasks = vec![Task::new("A", 3.0), Task::new("B", 4.0).after(["A"])];
    let schedule = pert::schedule(&tasks).unwrap();
    assert_eq!(schedule.project_duration(), 7.0);
    assert_eq!(schedule.critical_path(), ["A", "B"]);
}

#[test]
fn prim_on_disconnected_graph() {
    let mut graph = MatrixGraph::with_labels(["A", "B", "C"]).unwrap();
    graph.add_undirected_edge("A", "B", 5.0).unwrap();
    let tree = mst::prim(&graph, "A").unwrap();
    assert_eq!(tree.num_edges(), 1);
    assert_eq!((tree.edges()[0].from.as_str(), tree.edges()[0].to.as_str()), ("A", "B"));
    assert_eq!(tree.weight(), 5.0);
}

#[test]
fn unknown_source_is_rejected_everywhere() {
    let graph = demo::cities();
    let invalid = || GraphError::InvalidVertex("Paris".to_string());
    assert_eq!(dijkstra::shortest_path(graph, "Paris", "Rabat").unwrap_err(), invalid());
    assert_eq!(bellman_ford::shortest_paths(graph, "Paris").unwrap_err(), invalid());
    assert_eq!(search::bfs(graph, "Paris").unwrap_err(), invalid());
    assert_eq!(search::dfs(graph, "Paris").unwrap_err(), invalid());
    assert_eq!(mst::prim(graph, "Paris").unwrap_err(), invalid());
}

#[test]
fn demo_graph_is_shared_and_unchanged() {
    let before = demo::cities().clone();
    let _ = dijkstra::shortest_paths(demo::cities(), "Agadir").unwrap();
    let _ = floyd_warshall::all_pairs_distances(demo::cities());
    let _ = mst::kruskal(demo::cities());
    assert_eq!(*demo::cities(), before);
    assert!(std::ptr::eq(demo::cities(), demo::cities()));
}

#[test]
fn zero_weight_edges_need_a_sparse_graph() {
    let mut dense = MatrixGraph::with_labels(["A", "B"]).unwrap();
    dense.add_edge("A", "B", 0.0).unwrap();
    assert_eq!(dense.num_edges(), 0);

    let mut sparse = SparseGraph::new();
    sparse.add_vertex("A").unwrap();
    sparse.add_vertex("B").unwrap();
    sparse.add_edge("A", "B", 0.0).unwrap();
    let paths = bellman_ford::shortest_paths(&sparse, "A").unwrap();
    assert_eq!(paths.distance("B"), Ok(Some(0.0)));
    // Dijkstra only follows positive weights.
    assert!(matches!(
        dijkstra::shortest_path(&sparse, "A", "B"),
        Err(GraphError::NotFound { .. })
    ));
}

#[test]
fn validation_errors_lift_into_graph_errors() {
    fn run(tasks: &[Task]) -> Result<f64, GraphError> {
        Ok(pert::schedule(tasks)?.project_duration())
    }
    assert_eq!(run(&demo::house_construction()), Ok(13.0));
    assert_eq!(
        run(&[]),
        Err(GraphError::Validation(pert::ValidationError::EmptyProject))
    );
}
