// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durafmt, released under the BSD 3-Clause License.

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::parallel;

/// Build a `durafmt` command isolated from the caller's environment.
fn durafmt() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("durafmt")?;
    cmd.env_remove("DURAFMT_COLOR")
        .env_remove("DURAFMT_LOG")
        .env_remove("DURAFMT_OMIT_OXFORD_COMMA")
        .env_remove("CLICOLOR")
        .env_remove("CLICOLOR_FORCE");
    Ok(cmd)
}

#[test]
#[parallel]
fn requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a subcommand"));

    Ok(())
}

#[test]
#[parallel]
fn help() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: durafmt"));

    Ok(())
}

#[test]
#[parallel]
fn requires_values() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?.arg("short").assert().failure();

    Ok(())
}

#[test]
#[parallel]
fn short() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["short", "0", "1000", "60000", "61000", "120", "93661001"])
        .assert()
        .success()
        .stdout("0:00\n0:01\n1:00\n1:01\n0:00.120\n1:02:01:01.001\n");

    Ok(())
}

#[test]
#[parallel]
fn long() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["long", "0", "1000", "61000", "120", "93661001"])
        .assert()
        .success()
        .stdout(
            "0 seconds\n\
             1 second\n\
             1 minute, and 1 second\n\
             120 milliseconds\n\
             1 day, 2 hours, 1 minute, 1 second, and 1 millisecond\n",
        );

    Ok(())
}

#[test]
#[parallel]
fn long_omit_oxford_comma() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["long", "--omit-oxford-comma", "61000"])
        .assert()
        .success()
        .stdout("1 minute and 1 second\n");

    durafmt()?
        .args(["long", "61000"])
        .env("DURAFMT_OMIT_OXFORD_COMMA", "true")
        .assert()
        .success()
        .stdout("1 minute and 1 second\n");

    Ok(())
}

#[test]
#[parallel]
fn stdin() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["short", "-"])
        .write_stdin("1000\n\n61000\n")
        .assert()
        .success()
        .stdout("0:01\n1:01\n");

    Ok(())
}

#[test]
#[parallel]
fn not_a_number() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["short", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number: test"));

    durafmt()?
        .args(["long", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number: test"));

    Ok(())
}

#[test]
#[parallel]
fn not_an_integer() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["short", "12.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an integer: 12.5"));

    durafmt()?
        .args(["long", "--", "-12.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an integer: -12.5"));

    Ok(())
}

#[test]
#[parallel]
fn not_positive() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["short", "--", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not positive: -1"));

    durafmt()?
        .args(["long", "--", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not positive: -1"));

    Ok(())
}

#[test]
#[parallel]
fn stops_at_first_error() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["short", "1000", "test", "61000"])
        .assert()
        .failure()
        .stdout("0:01\n")
        .stderr(predicate::str::contains("not a number: test"));

    Ok(())
}

#[test]
#[parallel]
fn components_table() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["components", "--color", "never", "93661001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unit"))
        .stdout(predicate::str::is_match("(?m)^day +1$")?)
        .stdout(predicate::str::is_match("(?m)^hour +2$")?)
        .stdout(predicate::str::is_match("(?m)^millisecond +1$")?);

    Ok(())
}

#[test]
#[parallel]
fn components_json() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["components", "--json", "61000", "120"])
        .assert()
        .success()
        .stdout(
            "[{\"unit\":\"minute\",\"value\":1},{\"unit\":\"second\",\"value\":1}]\n\
             [{\"unit\":\"minute\",\"value\":0},{\"unit\":\"second\",\"value\":0},\
             {\"unit\":\"millisecond\",\"value\":120}]\n",
        );

    Ok(())
}

#[test]
#[parallel]
fn completed_message() -> Result<(), Box<dyn std::error::Error>> {
    durafmt()?
        .args(["-v", "short", "1000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Formatted 1 durations in"));

    Ok(())
}
