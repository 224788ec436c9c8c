use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn colsort(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_colsort"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // the tool may exit before reading anything
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

#[test]
fn stdin_to_stdout() {
    let out = colsort(&[], "b,2\na,1\nc,3\n");
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "== Started ==\nsorted result:\na,1\nb,2\nc,3\n== Finished ==\n"
    );
}

#[test]
fn reverse_quiet() {
    let out = colsort(&["-r", "-q"], "b,2\na,1\nc,3\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "c,3\nb,2\na,1\n");
}

#[test]
fn header_and_field() {
    let out = colsort(&["-h", "-f", "1", "--quiet"], "name,val\na,2\nb,1\n");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "name,val\nb,1\na,2\n");
}

#[test]
fn files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "b,2\na,1\n").unwrap();
    let out = colsort(
        &["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()],
        "",
    );
    assert!(out.status.success());
    assert!(stdout(&out).contains("sorted result:\na,1\nb,2\n"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "a,1\nb,2\n");
}

#[test]
fn empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");
    let out = colsort(&["-q", "-o", output.to_str().unwrap()], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "");
    assert!(!output.exists());
}

#[test]
fn malformed_row() {
    let out = colsort(&["-q"], "a,1,2\nb,3\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("row has 2 columns, but must have 3"));
}

#[test]
fn column_out_of_range() {
    let out = colsort(&["-q", "-f", "7"], "a,1\nb,2\n");
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("sort column 7 is out of range"));
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.csv");
    let out = colsort(&["-i", input.to_str().unwrap()], "");
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.starts_with("Error\t"));
    assert!(err.contains("nope.csv"));
}

#[test]
fn bad_field_number() {
    let out = colsort(&["-f", "x"], "a,1\n");
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("Invalid column number 'x'"));
}
