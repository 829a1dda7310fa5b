use assert_cmd::Command;
use predicates::prelude::*;

const EXPECTED_TAIL: &str = "1. Alice: Hello, Alice!\n\
                             2. Bob: Hello, Bob!\n\
                             3. Charlie: Hello, Charlie!\n\
                             Name lengths: {'Alice': 5, 'Bob': 3, 'Charlie': 7}\n\
                             David is now 26 years old!\n";

fn greeter() -> Command {
    let mut cmd = Command::cargo_bin("greeter").unwrap();
    // Keep stderr free of log output unless a test opts in.
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_full_session() {
    greeter()
        .write_stdin("Zed\n")
        .assert()
        .success()
        .stdout(format!("Enter your name: Hello, Zed!\n{}", EXPECTED_TAIL))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_closed_stdin_greets_empty_name() {
    greeter()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter your name: Hello, !\n"))
        .stdout(predicate::str::ends_with("David is now 26 years old!\n"))
        .stderr(predicate::str::contains("end of input"));
}

#[test]
fn test_windows_line_ending() {
    greeter()
        .write_stdin("Ann\r\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Ann!\n"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    greeter()
        .env("RUST_LOG", "debug")
        .write_stdin("Ann\n")
        .assert()
        .success()
        .stdout(format!("Enter your name: Hello, Ann!\n{}", EXPECTED_TAIL))
        .stderr(predicate::str::contains("Read name \"Ann\""));
}

#[test]
fn test_only_first_line_is_read() {
    greeter()
        .write_stdin("Ann\nBob\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter your name: Hello, Ann!\n1."));
}
