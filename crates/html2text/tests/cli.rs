use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn html2text() -> Command {
    Command::cargo_bin("html2text").expect("Binary must be built")
}

#[test]
fn test_reads_stdin() {
    html2text()
        .write_stdin("<p>Hello <b>there</b></p>")
        .assert()
        .success()
        .stdout("hello there\n");
}

#[test]
fn test_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"<h1>Page Title</h1>").unwrap();

    html2text()
        .arg(file.path())
        .assert()
        .success()
        .stdout("page Title\n");
}

#[test]
fn test_case_fold_flag() {
    html2text()
        .args(["--case-fold", "every-token"])
        .write_stdin("One Two")
        .assert()
        .success()
        .stdout("one two\n");

    html2text()
        .args(["--case-fold", "shout"])
        .write_stdin("One Two")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown case fold"));
}

#[test]
fn test_max_bytes_cuts_input() {
    html2text()
        .args(["--max-bytes", "9"])
        .write_stdin("first second third")
        .assert()
        .success()
        .stdout("first sec\n");
}

#[test]
fn test_stats_flag() {
    html2text()
        .args(["--stats", "--max-word-length", "4"])
        .write_stdin("<p>tiny enormous</p>")
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains(
            "words: 0, dropped: 2, tags: 2, unterminated tag: false",
        ));
}

#[test]
fn test_missing_file() {
    html2text()
        .arg("/nonexistent/page.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}
