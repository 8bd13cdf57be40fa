use std::fs;

use predicates::prelude::*;

use crate::common::{JobDirs, count_words};

#[test]
fn counts_two_files() {
    let job = JobDirs::new().file("file1.txt", "the quick fox").file("file2.txt", "a\nb\tc  d");

    job.command()
        .assert()
        .success()
        .stdout("Total word count:  7\n")
        .stderr("");

    assert_eq!(job.report_lines("count.txt"), ["file1.txt has 3 words", "file2.txt has 4 words"]);
}

#[test]
fn empty_file_counts_zero() {
    let job = JobDirs::new().file("empty.txt", "");

    job.command().assert().success().stdout("Total word count:  0\n");

    assert_eq!(job.report_lines("count.txt"), ["empty.txt has 0 words"]);
}

#[test]
fn whitespace_only_file_counts_zero() {
    let job = JobDirs::new().file("blank.txt", " \t\n\r\n  ");

    job.command().assert().success().stdout("Total word count:  0\n");

    assert_eq!(job.report_lines("count.txt"), ["blank.txt has 0 words"]);
}

#[test]
fn empty_input_directory_fails_without_report() {
    let job = JobDirs::new();

    job.command()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("no files found"))
        .stderr(predicate::str::contains('\n').count(1));

    assert!(!job.outputs().join("count.txt").exists());
}

#[test]
fn missing_input_directory_fails_without_report() {
    let job = JobDirs::new();
    fs::remove_dir(job.inputs()).unwrap();

    job.command()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to open directory"));

    assert!(!job.outputs().join("count.txt").exists());
}

#[test]
fn missing_output_directory_fails() {
    let job = JobDirs::new().file("a.txt", "words here");
    fs::remove_dir(job.outputs()).unwrap();

    job.command()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to create report"));
}

#[test]
fn directories_come_from_the_environment() {
    let job = JobDirs::new().file("only.txt", "one two three four five");

    count_words()
        .env("COUNT_WORDS_INPUT_DIR", job.inputs())
        .env("COUNT_WORDS_OUTPUT_DIR", job.outputs())
        .env("COUNT_WORDS_REPORT_NAME", "words.txt")
        .assert()
        .success()
        .stdout("Total word count:  5\n");

    assert_eq!(job.report_lines("words.txt"), ["only.txt has 5 words"]);
}

#[test]
fn invalid_report_name_is_rejected() {
    let job = JobDirs::new().file("a.txt", "x");

    job.command()
        .args(["--report-name", "sub/count.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plain file name"));
}

#[test]
fn rerun_overwrites_report() {
    let job = JobDirs::new().file("a.txt", "alpha beta").file("b.txt", "gamma");

    job.command().assert().success().stdout("Total word count:  3\n");
    let first = job.report_lines("count.txt");
    job.command().assert().success().stdout("Total word count:  3\n");

    assert_eq!(first, job.report_lines("count.txt"));
    assert_eq!(first.len(), 2);
}

#[test]
fn subdirectory_aborts_the_run() {
    let job = JobDirs::new().file("top.txt", "one two");
    fs::create_dir(job.inputs().join("nested")).unwrap();
    fs::write(job.inputs().join("nested").join("inner.txt"), "three four five").unwrap();

    let assert = job
        .command()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("nested"));

    // Linux opens directories and fails on the first read.
    #[cfg(target_os = "linux")]
    assert.stderr(predicate::str::contains("failed to read file"));
}

#[cfg(unix)]
#[test]
fn dangling_link_among_files_aborts_the_run() {
    let job = JobDirs::new().file("a.txt", "one two").file("b.txt", "three");
    std::os::unix::fs::symlink(job.inputs().join("missing-target"), job.inputs().join("broken")).unwrap();

    job.command()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to open file").and(predicate::str::contains("broken")))
        .stderr(predicate::str::contains('\n').count(1));
}

#[cfg(target_os = "linux")]
#[test]
fn report_on_device_without_fsync_still_succeeds() {
    let job = JobDirs::new().file("b.txt", "x");

    count_words()
        .arg("--input-dir")
        .arg(job.inputs())
        .args(["--output-dir", "/dev", "--report-name", "null"])
        .assert()
        .success()
        .stdout("Total word count:  1\n")
        .stderr("");
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let job = JobDirs::new().file("a.txt", "x y");

    job.command()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("Total word count:  2\n")
        .stderr(predicate::str::contains("word count complete"));
}
