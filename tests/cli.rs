use assert_cmd::Command;
use predicates::prelude::*;

const CROSS_PICTURE: &str = "    1 1 5 1 1\n\
                             \x20 +----------+\n\
                             \x201|    ##    |\n\
                             \x201|    ##    |\n\
                             \x205|##########|\n\
                             \x201|    ##    |\n\
                             \x201|    ##    |\n\
                             \x20 +----------+\n\n";

#[test]
fn test_cli_solves_from_stdin() {
    let mut cmd = Command::cargo_bin("griddler").unwrap();

    cmd.pipe_stdin("tests/fixtures/cross.txt")
        .unwrap()
        .assert()
        .success()
        .stdout(CROSS_PICTURE);
}

#[test]
fn test_cli_solves_from_path() {
    let mut cmd = Command::cargo_bin("griddler").unwrap();

    cmd.arg("tests/fixtures/cross.txt")
        .assert()
        .success()
        .stdout(CROSS_PICTURE);
}

#[test]
fn test_cli_html_output() {
    let mut cmd = Command::cargo_bin("griddler").unwrap();

    cmd.arg("--html")
        .arg("tests/fixtures/cross.txt")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<html>"))
        .stdout(predicate::str::contains("<td class=\"full\">"));
}

#[test]
fn test_cli_stats_suppress_picture() {
    let mut cmd = Command::cargo_bin("griddler").unwrap();

    cmd.arg("--stats")
        .arg("tests/fixtures/cross.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Line visits"))
        .stdout(predicate::str::contains("SOLVED"))
        .stdout(predicate::str::contains("##").not());
}

#[test]
fn test_cli_inconsistent_puzzle() {
    let mut cmd = Command::cargo_bin("griddler").unwrap();

    cmd.write_stdin("3 3\n3\n0\n0\n1\n0\n1\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Inconsistent! Bamf!"));
}

#[test]
fn test_cli_rejects_garbage() {
    let mut cmd = Command::cargo_bin("griddler").unwrap();

    cmd.write_stdin("This is not a valid input.")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("invalid input at line 1"));
}

#[test]
fn test_cli_rejects_overfull_clue() {
    // The clue cannot fit its line, caught before solving starts.
    let mut cmd = Command::cargo_bin("griddler").unwrap();

    cmd.write_stdin("2 2\n3\n1\n1\n1\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cannot fit"));
}
