//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// File name the instrumentation writes its call trace to, relative to the
/// working directory of the instrumented run
pub const DEFAULT_TRACE_FILE: &str = "callgraph.csv";

/// Column holding the caller in a trace CSV
pub const SOURCE_COLUMN: &str = "source";

/// Column holding the callee in a trace CSV
pub const TARGET_COLUMN: &str = "target";

/// Default path for the JSON graph report
pub const DEFAULT_REPORT_FILE: &str = "callgraph.json";

/// Default number of hottest edges kept in reports and summaries
pub const DEFAULT_TOP_EDGES: usize = 20;
pub const MAX_TOP_EDGES: usize = 10_000;

/// Graphviz executable used to render DOT files
pub const GRAPHVIZ_BINARY: &str = "dot";

/// Image formats accepted by the renderer, keyed by file extension
pub const RENDER_FORMATS: &[&str] = &["png", "pdf", "svg"];
