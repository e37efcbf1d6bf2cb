//! End-to-end routing through the real process streams.

mod common;

use common::run_splitlog;

#[test]
fn test_debug_level_routes_debug_to_stdout() {
    let run = run_splitlog(Some("DEBUG"), &["emit", "--level", "debug", "cache warmed"]);
    assert!(run.status.success());

    let records = run.stdout_records();
    assert!(records.iter().any(|l| l.contains("\tdebug\t") && l.contains("cache warmed")));
    assert!(run.stderr.is_empty(), "{}", run.stderr);
}

#[test]
fn test_error_goes_to_stderr_only() {
    let run = run_splitlog(Some("debug"), &["emit", "--level", "error", "disk full"]);
    assert!(run.status.success());

    assert!(run.stderr.contains("\terror\t"));
    assert!(run.stderr.contains("disk full"));
    assert!(!run.stdout.contains("disk full"));
}

#[test]
fn test_unset_level_suppresses_warn() {
    let run = run_splitlog(None, &["emit", "--level", "warn", "retrying"]);
    assert!(run.status.success());
    assert!(run.stdout.is_empty(), "{}", run.stdout);
    assert!(run.stderr.is_empty(), "{}", run.stderr);

    let run = run_splitlog(None, &["emit", "--level", "error", "gave up"]);
    assert!(run.stderr.contains("gave up"));
    assert!(run.stdout.is_empty());
}

#[test]
fn test_numeric_code_matches_name() {
    let by_code = run_splitlog(Some("2"), &["levels"]);
    let by_name = run_splitlog(Some("ERROR"), &["levels"]);
    assert_eq!(by_code.stdout, by_name.stdout);
    assert!(by_code.stdout.contains("warn    dropped"));
    assert!(by_code.stdout.contains("error   stderr"));
}

#[test]
fn test_unrecognized_level_behaves_like_error() {
    let garbage = run_splitlog(Some("verbose"), &["levels"]);
    let unset = run_splitlog(None, &["levels"]);
    assert_eq!(garbage.stdout, unset.stdout);
}

#[test]
fn test_self_test_record_when_info_admitted() {
    let run = run_splitlog(Some("info"), &["levels"]);
    let first = run.stdout.lines().next().unwrap_or_default();
    assert!(first.contains("successfully initiated logging, level = info"), "{}", first);
    assert!(first.contains("\tinfo\t"));

    let quiet = run_splitlog(Some("warn"), &["levels"]);
    assert!(!quiet.stdout.contains("successfully initiated logging"));
}

#[test]
fn test_fields_on_the_line() {
    let run = run_splitlog(
        Some("info"),
        &["emit", "--field", "code=17", "-f", "user=ann", "request served"],
    );
    let line = run
        .stdout_records()
        .into_iter()
        .find(|l| l.contains("request served"))
        .expect("record missing");
    assert!(line.ends_with("\trequest served\t{\"code\":17,\"user\":\"ann\"}"), "{}", line);
    assert!(line.contains("\tsrc/main.rs:"), "{}", line);
}

#[test]
fn test_fatal_exits_with_status_one() {
    let run = run_splitlog(Some("fatal"), &["emit", "--level", "fatal", "unrecoverable"]);
    assert_eq!(run.status.code(), Some(1));

    let records = run.stderr_records();
    assert!(records[0].contains("\tfatal\t"));
    assert!(records[0].contains("unrecoverable"));
    // The stack trace follows the record line.
    assert!(run.stderr.lines().count() > 1);
}

#[test]
fn test_fatal_record_keeps_fields() {
    let run = run_splitlog(
        Some("info"),
        &["emit", "--level", "fatal", "--field", "code=17", "down"],
    );
    assert_eq!(run.status.code(), Some(1));

    let records = run.stderr_records();
    assert!(records[0].contains("\tfatal\t"), "{}", records[0]);
    assert!(records[0].ends_with("\tdown\t{\"code\":17}"), "{}", records[0]);
}

#[test]
fn test_panic_record_keeps_fields() {
    let run = run_splitlog(None, &["emit", "--level", "panic", "-f", "shard=3", "corrupt"]);
    assert!(!run.status.success());
    assert!(run.stderr_records()[0].ends_with("\tcorrupt\t{\"shard\":3}"));
}

#[test]
fn test_panic_level_panics_after_writing() {
    let run = run_splitlog(None, &["emit", "--level", "panic", "corrupt state"]);
    assert!(!run.status.success());
    assert!(run.stderr_records()[0].contains("\tpanic\t"));
    assert!(run.stderr.contains("corrupt state"));
}

#[test]
fn test_threshold_above_error_keeps_stderr_band() {
    let run = run_splitlog(Some("dpanic"), &["levels"]);
    for line in ["debug   dropped", "warn    dropped", "error   stderr", "fatal   stderr"] {
        assert!(run.stdout.contains(line), "missing {:?} in\n{}", line, run.stdout);
    }
}
