use call_trace_studio::graph::{CallGraph, NodeOrder};
use call_trace_studio::output::{
    read_report, render_format, to_report, validate_path, write_dot, write_report, MatrixSection,
};
use call_trace_studio::parser::WeightedEdge;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_graph() -> CallGraph {
    let edges = vec![
        WeightedEdge::new("main".to_string(), "execute".to_string(), 5),
        WeightedEdge::new("execute".to_string(), "store".to_string(), 3),
        WeightedEdge::new("execute".to_string(), "execute".to_string(), 2),
    ];
    CallGraph::build(&edges).unwrap()
}

#[test]
fn test_write_and_read_report() {
    let graph = create_test_graph();
    let matrix = MatrixSection::from_graph(&graph, false, NodeOrder::Sorted);
    let report = to_report("seeds/input-0", &graph, 2, Some(matrix));

    let temp_file = NamedTempFile::new().unwrap();
    write_report(&report, temp_file.path()).unwrap();
    let loaded = read_report(temp_file.path()).unwrap();

    assert_eq!(loaded.source, "seeds/input-0");
    assert_eq!(loaded.node_count, 3);
    assert_eq!(loaded.edge_count, 3);
    assert_eq!(loaded.total_calls, 10);
    assert_eq!(loaded.hot_edges.len(), 2);
    assert_eq!(loaded.hot_edges[0].calls, 5);
    assert_eq!(loaded.hot_edges[0].percentage, 50.0);

    let section = loaded.matrix.unwrap();
    assert!(!section.weighted);
    assert_eq!(section.node_order, NodeOrder::Sorted);
    assert_eq!(section.nodes, vec!["execute", "main", "store"]);
    assert!(section.matrix.is_well_formed());
    assert_eq!(section.matrix.sum(), 3);
}

#[test]
fn test_report_without_matrix() {
    let graph = create_test_graph();
    let report = to_report("trace.csv", &graph, 20, None);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("matrix").is_none());
    assert_eq!(json["edges"].as_array().unwrap().len(), 3);
}

#[test]
fn test_write_dot_file() {
    let graph = create_test_graph();
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("callgraph.dot");

    write_dot(&graph.export_drawable(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("digraph"));
    assert!(content.contains("label = \"5\""));
}

#[test]
fn test_validate_path() {
    assert!(validate_path(Path::new("")).is_err());

    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
    assert!(validate_path(&temp_dir.path().join("report.json")).is_ok());
}

#[test]
fn test_render_format() {
    assert_eq!(render_format(Path::new("graph.pdf")).unwrap(), "pdf");
    assert!(render_format(Path::new("graph.dot")).is_err());
}
