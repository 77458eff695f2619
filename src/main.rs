//! Call Trace Studio CLI
//!
//! Runs an instrumented binary against a test input and turns the recorded
//! call trace into a weighted call graph, adjacency matrix and DOT file.

use anyhow::Result;
use call_trace_studio::commands::{
    display_schema, display_version, execute_graph, execute_run, validate_graph_args,
    validate_report_file, validate_run_args, GraphArgs, OutputOptions, RunArgs,
};
use call_trace_studio::graph::NodeOrder;
use call_trace_studio::runner::InputSelection;
use call_trace_studio::utils::config::{DEFAULT_REPORT_FILE, DEFAULT_TOP_EDGES, DEFAULT_TRACE_FILE};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Call Trace Studio - dynamic call graphs for binaries under test
#[derive(Parser, Debug)]
#[command(name = "call-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the instrumented binary and build its call graph
    Run {
        /// Instrumented binary
        #[arg(short, long, env = "CALL_TRACE_BINARY")]
        binary: PathBuf,

        /// Directory containing the test inputs
        #[arg(short, long, env = "CALL_TRACE_INPUTS")]
        inputs: PathBuf,

        /// Zero-based index of the test input to run
        #[arg(short, long, default_value = "0", conflicts_with = "all")]
        seed: usize,

        /// Run every test input and aggregate them into one graph
        #[arg(long)]
        all: bool,

        /// Argument passed to the binary before the input (repeatable)
        #[arg(long = "flag", allow_hyphen_values = true)]
        flags: Vec<String>,

        /// Trace file written by the instrumentation
        #[arg(long, default_value = DEFAULT_TRACE_FILE)]
        trace_file: PathBuf,

        /// Working directory for the instrumented runs
        #[arg(long, default_value = ".")]
        workdir: PathBuf,

        /// Keep the trace file after the run
        #[arg(long)]
        keep_artifacts: bool,

        #[command(flatten)]
        outputs: OutputFlags,
    },

    /// Build a call graph from an existing trace CSV
    Graph {
        /// Path to the call trace CSV
        #[arg(short, long, default_value = DEFAULT_TRACE_FILE)]
        trace: PathBuf,

        #[command(flatten)]
        outputs: OutputFlags,
    },

    /// Validate a graph report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

/// Output flags shared by `run` and `graph`
#[derive(Args, Debug)]
struct OutputFlags {
    /// Output path for the JSON graph report
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,

    /// Skip the JSON report
    #[arg(long)]
    no_report: bool,

    /// Output path for the DOT graph description
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Render the graph with Graphviz (png, pdf or svg, from the extension)
    #[arg(long)]
    render: Option<PathBuf>,

    /// Use 0/1 edge indicators instead of call counts in the matrix
    #[arg(long)]
    unweighted: bool,

    /// Row/column order of the adjacency matrix
    #[arg(long, value_enum, default_value_t = NodeOrder::FirstSeen)]
    node_order: NodeOrder,

    /// Leave the adjacency matrix out of the report
    #[arg(long)]
    no_matrix: bool,

    /// Number of hottest edges to include
    #[arg(long, default_value_t = DEFAULT_TOP_EDGES)]
    top_edges: usize,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,
}

impl From<OutputFlags> for OutputOptions {
    fn from(flags: OutputFlags) -> Self {
        Self {
            output_json: (!flags.no_report).then_some(flags.output),
            output_dot: flags.dot,
            render: flags.render,
            weighted: !flags.unweighted,
            node_order: flags.node_order,
            include_matrix: !flags.no_matrix,
            top_edges: flags.top_edges,
            print_summary: flags.summary,
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Run {
            binary,
            inputs,
            seed,
            all,
            flags,
            trace_file,
            workdir,
            keep_artifacts,
            outputs,
        } => {
            let args = RunArgs {
                binary,
                inputs_dir: inputs,
                selection: if all {
                    InputSelection::All
                } else {
                    InputSelection::Single(seed)
                },
                flags,
                trace_file,
                working_dir: workdir,
                keep_artifacts,
                outputs: outputs.into(),
            };

            validate_run_args(&args)?;
            execute_run(args)?;
        }

        Commands::Graph { trace, outputs } => {
            let args = GraphArgs {
                trace,
                outputs: outputs.into(),
            };

            validate_graph_args(&args)?;
            execute_graph(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
