use crate::graph::NodeOrder;
use crate::runner::InputSelection;
use crate::utils::config::{DEFAULT_REPORT_FILE, DEFAULT_TOP_EDGES, DEFAULT_TRACE_FILE};
use std::path::PathBuf;

/// Output settings shared by the `run` and `graph` commands
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Output path for the JSON graph report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for the DOT description (optional)
    pub output_dot: Option<PathBuf>,

    /// Output path for a Graphviz-rendered image (optional)
    pub render: Option<PathBuf>,

    /// Matrix cells hold call counts instead of 0/1
    pub weighted: bool,

    /// Row/column order of the adjacency matrix
    pub node_order: NodeOrder,

    /// Include the adjacency matrix in the report
    pub include_matrix: bool,

    /// Number of hottest edges to include in the report
    pub top_edges: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            output_json: Some(PathBuf::from(DEFAULT_REPORT_FILE)),
            output_dot: None,
            render: None,
            weighted: true,
            node_order: NodeOrder::FirstSeen,
            include_matrix: true,
            top_edges: DEFAULT_TOP_EDGES,
            print_summary: false,
        }
    }
}

/// Arguments for the run command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Instrumented binary
    pub binary: PathBuf,

    /// Directory holding the test inputs
    pub inputs_dir: PathBuf,

    /// Which inputs to run
    pub selection: InputSelection,

    /// Extra arguments placed before the test input
    pub flags: Vec<String>,

    /// Trace file written by the instrumentation
    pub trace_file: PathBuf,

    /// Working directory of the instrumented runs
    pub working_dir: PathBuf,

    /// Leave the trace file on disk
    pub keep_artifacts: bool,

    pub outputs: OutputOptions,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            binary: PathBuf::new(),
            inputs_dir: PathBuf::new(),
            selection: InputSelection::default(),
            flags: Vec::new(),
            trace_file: PathBuf::from(DEFAULT_TRACE_FILE),
            working_dir: PathBuf::from("."),
            keep_artifacts: false,
            outputs: OutputOptions::default(),
        }
    }
}

/// Arguments for the graph command
#[derive(Debug, Clone)]
pub struct GraphArgs {
    /// Existing call trace CSV
    pub trace: PathBuf,

    pub outputs: OutputOptions,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            trace: PathBuf::from(DEFAULT_TRACE_FILE),
            outputs: OutputOptions::default(),
        }
    }
}
