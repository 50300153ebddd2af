use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_fastp_output_parser");
const OUTPUT: &str = "fastp_reports.csv";

fn report_json(rate: &str, reads: u64) -> String {
    let group = format!(
        r#"{{"total_reads": {reads}, "total_bases": {}, "q20_bases": {}, "q30_bases": {}, "mean_length": 50}}"#,
        reads * 50,
        reads * 49,
        reads * 48
    );
    format!(
        r#"{{"duplication": {{"rate": {rate}, "histogram": [1, 2, 3]}},
            "read1_before_filtering": {group},
            "read2_before_filtering": {group},
            "read1_after_filtering": {group},
            "read2_after_filtering": {group},
            "filtering_result": {{"passed_filter_reads": {reads}}}}}"#
    )
}

fn run_in(workdir: &Path, args: &[&Path]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(workdir)
        .output()
        .expect("failed to launch binary")
}

fn setup() -> (TempDir, TempDir) {
    (tempfile::tempdir().unwrap(), tempfile::tempdir().unwrap())
}

#[test]
fn no_argument_prints_usage_and_exits_cleanly() {
    let work = tempfile::tempdir().unwrap();
    let out = run_in(work.path(), &[]);

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage"));
    assert!(!work.path().join(OUTPUT).exists());
    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

#[test]
fn empty_directory_gives_header_only() {
    let (input, work) = setup();
    let out = run_in(work.path(), &[input.path()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let text = fs::read_to_string(work.path().join(OUTPUT)).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("\treport_name\tduplication\t"));
}

#[test]
fn writes_one_row_per_report_into_working_directory() {
    let (input, work) = setup();
    fs::write(input.path().join("sample1.json"), report_json("0.12", 1000)).unwrap();
    fs::write(input.path().join("sample2.json"), report_json("0.5", 20)).unwrap();
    fs::write(input.path().join("sample2.html"), "<html></html>").unwrap();

    let out = run_in(work.path(), &[input.path()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Wrote 2 report(s)"));
    assert!(!input.path().join(OUTPUT).exists());

    let text = fs::read_to_string(work.path().join(OUTPUT)).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);

    let header: Vec<&str> = lines[0].split('\t').collect();
    assert_eq!(header.len(), 19);
    assert_eq!(header[0], "");
    assert_eq!(header[18], "read2_after_filtering_q30_bases");

    let sample1 = input.path().join("sample1.json").display().to_string();
    let row = lines[1..]
        .iter()
        .map(|l| l.split('\t').collect::<Vec<_>>())
        .find(|cells| cells[1] == sample1)
        .expect("sample1 row missing");
    let mut expected = vec!["0.12"];
    for _ in 0..4 {
        expected.extend(["1000", "50000", "49000", "48000"]);
    }
    assert_eq!(&row[2..], expected.as_slice());
}

#[test]
fn missing_field_aborts_without_touching_output() {
    let (input, work) = setup();
    fs::write(input.path().join("good.json"), report_json("0.12", 10)).unwrap();
    let truncated = report_json("0.12", 10).replace("\"q30_bases\"", "\"q40_bases\"");
    fs::write(input.path().join("bad.json"), truncated).unwrap();
    fs::write(work.path().join(OUTPUT), "kept\n").unwrap();

    let out = run_in(work.path(), &[input.path()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("bad.json"));
    assert_eq!(fs::read_to_string(work.path().join(OUTPUT)).unwrap(), "kept\n");
}

#[test]
fn unreadable_directory_fails() {
    let work = tempfile::tempdir().unwrap();
    let missing = work.path().join("does-not-exist");
    let out = run_in(work.path(), &[missing.as_path()]);
    assert!(!out.status.success());
    assert!(!work.path().join(OUTPUT).exists());
}
