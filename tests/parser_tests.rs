use call_trace_studio::parser::{parse_trace, read_trace_file, CallRecord};
use call_trace_studio::utils::error::TraceError;
use std::fs;

const SAMPLE_TRACE: &str = "\
source,target
main,parse_args
main,run
run,step
run,step
step,step
";

#[test]
fn test_read_trace_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("callgraph.csv");
    fs::write(&path, SAMPLE_TRACE).unwrap();

    let records = read_trace_file(&path).unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[0], CallRecord::new("main".to_string(), "parse_args".to_string()));
    assert_eq!(records[4], CallRecord::new("step".to_string(), "step".to_string()));
}

#[test]
fn test_read_missing_trace_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_trace_file(dir.path().join("callgraph.csv"));

    assert!(matches!(result, Err(TraceError::Io(_))));
}

#[test]
fn test_quoted_symbols() {
    let csv = "source,target\n\"operator,()\",\"std::vector<int, alloc>::push\"\n";
    let records = parse_trace(csv.as_bytes()).unwrap();

    assert_eq!(records[0].source, "operator,()");
    assert_eq!(records[0].target, "std::vector<int, alloc>::push");
}

#[test]
fn test_address_tokens_are_opaque() {
    let csv = "source,target\n0x401000,0x4011f0\n0X401000,0x4011f0\n";
    let records = parse_trace(csv.as_bytes()).unwrap();

    // Differently spelled addresses stay distinct nodes
    assert_ne!(records[0].source, records[1].source);
}

#[test]
fn test_empty_stream_rejected() {
    let result = parse_trace("".as_bytes());
    assert!(matches!(result, Err(TraceError::InvalidHeader(_))));
}

#[test]
fn test_extra_header_column_rejected() {
    let result = parse_trace("source,target,count\nmain,run,1\n".as_bytes());
    assert!(matches!(result, Err(TraceError::InvalidHeader(_))));
}

#[test]
fn test_bad_row_reports_line() {
    let csv = "source,target\nmain,run\nrun,step\nrun\n";

    match parse_trace(csv.as_bytes()) {
        Err(TraceError::MalformedRecord { line, reason }) => {
            assert_eq!(line, 4);
            assert!(reason.contains("found 1"));
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}
