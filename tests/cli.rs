use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn sample() -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"1,2,3\n4,5\n6\n").unwrap();
    f
}

fn readfile(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_readfile-bench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

fn is_cost_line(line: &str) -> bool {
    line.strip_prefix("read file cost ")
        .and_then(|s| s.strip_suffix(" ms "))
        .is_some_and(|ms| ms.parse::<u64>().is_ok())
}

#[test]
fn line_method_report() {
    let f = sample();
    let out = readfile(&[f.path().to_str().unwrap(), "line"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "docs_size:0 doc_lens_size:0");
    assert!(is_cost_line(lines[1]), "{:?}", lines[1]);
}

#[test]
fn buffer_method_report() {
    let f = sample();
    let out = readfile(&[f.path().to_str().unwrap(), "buffer"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "1");
    assert_eq!(lines[1], "docs_size:0 doc_lens_size:0");
    assert!(is_cost_line(lines[2]), "{:?}", lines[2]);
}

#[test]
fn empty_file_is_one_chunk() {
    let f = NamedTempFile::new().unwrap();
    let out = readfile(&[f.path().to_str().unwrap(), "buffer"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "1");
    assert_eq!(lines[1], "docs_size:0 doc_lens_size:0");
}

#[test]
fn parse_flag_report() {
    let f = sample();
    let out = readfile(&[f.path().to_str().unwrap(), "line", "--parse"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().next(), Some("docs_size:3 doc_lens_size:3"));
}

#[test]
fn missing_argument_fails() {
    let f = sample();
    let out = readfile(&[f.path().to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    for method in ["line", "buffer"] {
        let out = readfile(&[path.to_str().unwrap(), method]);
        assert_eq!(out.status.code(), Some(1));
        let stderr = String::from_utf8(out.stderr).unwrap();
        assert!(stderr.contains("cannot open"), "{stderr}");
    }
}

#[test]
fn malformed_record_fails_when_parsing() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"1,2\n3,seven\n").unwrap();
    let out = readfile(&[f.path().to_str().unwrap(), "buffer", "--parse"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("line 2"), "{stderr}");
}
