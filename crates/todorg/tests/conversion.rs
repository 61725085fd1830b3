//! End-to-end conversion tests through the filesystem.

use std::fs;
use tempfile::TempDir;

fn convert(content: &str) -> anyhow::Result<String> {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("todo.txt");
    let output = dir.path().join("todotxt_import.org");
    fs::write(&input, content).unwrap();

    todorg::convert_file(&input, &output)?;
    Ok(fs::read_to_string(&output).unwrap())
}

#[test]
fn converts_a_mixed_file() {
    let content = "\
(A) 2023-05-01 Buy milk +groceries @home
x 2023-01-02 2023-01-01 File taxes +finance
Water plants t:2023-03-03 due:2023-04-04
";
    let expected = "\
* TODO [#A] Buy milk :groceries:
  :PROPERTIES:
  :Imported todo.txt line: (A) 2023-05-01 Buy milk +groceries @home
  :todotxt_contexts: home
  :END:
  [2023-05-01 Mon]
* DONE File taxes :finance:
  :PROPERTIES:
  :Imported todo.txt line: x 2023-01-02 2023-01-01 File taxes +finance
  :END:
  DONE: [2023-01-01 Sun]
  [2023-01-01 Sun]
* TODO Water plants
  SCHEDULED: <2023-03-03 Fri>
  :PROPERTIES:
  :Imported todo.txt line: Water plants t:2023-03-03 due:2023-04-04
  :END:
";
    assert_eq!(convert(content).unwrap(), expected);
}

#[test]
fn one_heading_per_line() {
    let content = "first\nsecond\nthird\n";
    let org = convert(content).unwrap();
    assert_eq!(org.lines().filter(|l| l.starts_with("* ")).count(), 3);
}

#[test]
fn ambiguous_recovery_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("todo.txt");
    let output = dir.path().join("out.org");
    fs::write(&input, "(A) 2023-05-01 ship release 2023-05-02\n").unwrap();

    let err = todorg::convert_file(&input, &output).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<todorg::ConvertError>(),
        Some(todorg::ConvertError::AmbiguousDateRecovery { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn invalid_threshold_date_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("todo.txt");
    let output = dir.path().join("out.org");
    fs::write(&input, "Water plants t:not-a-date\n").unwrap();

    let err = todorg::convert_file(&input, &output).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<todorg::ConvertError>(),
        Some(todorg::ConvertError::DateParse { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn missing_input_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.txt");
    let output = dir.path().join("out.org");

    let err = todorg::convert_file(&input, &output).unwrap_err();
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn output_is_replaced_not_appended() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("todo.txt");
    let output = dir.path().join("out.org");
    fs::write(&input, "only task\n").unwrap();
    fs::write(&output, "* TODO stale content from a previous run\n").unwrap();

    todorg::convert_file(&input, &output).unwrap();
    let org = fs::read_to_string(&output).unwrap();
    assert!(!org.contains("stale content"));
    assert!(org.contains("only task"));
}
