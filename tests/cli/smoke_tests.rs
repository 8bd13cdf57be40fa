use predicates::prelude::*;

use crate::common::count_words;

#[test]
fn shows_help() {
    count_words()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count_words"))
        .stdout(predicate::str::contains("--input-dir"));
}

#[test]
fn shows_version() {
    count_words()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flags() {
    count_words().arg("--recursive").assert().failure();
}
