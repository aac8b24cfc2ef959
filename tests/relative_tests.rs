//! Integration tests for relative start and end dates

#![allow(deprecated)]

use chrono::{Duration, Local, NaiveDate};
use predicates::prelude::*;

mod common;
use common::daterange_cmd;

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn test_default_run_is_last_week() {
    let today = Local::now().date_naive();
    let expected: Vec<String> = (0..7).map(|i| iso(today - Duration::days(i))).collect();

    daterange_cmd()
        .args(["-f", "%Y-%m-%d"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.join("\n")));
}

#[test]
fn test_today_keyword() {
    let today = Local::now().date_naive();

    daterange_cmd()
        .args(["-f", "%Y-%m-%d", "-s", "today", "-c", "1"])
        .assert()
        .success()
        .stdout(format!("{}\n", iso(today)));
}

#[test]
fn test_yesterday_to_today() {
    let today = Local::now().date_naive();
    let yesterday = today - Duration::days(1);

    daterange_cmd()
        .args(["-f", "%Y-%m-%d", "-s", "yesterday", "-e", "today"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", iso(yesterday), iso(today)));
}

#[test]
fn test_days_ago_range() {
    let today = Local::now().date_naive();
    let expected: Vec<String> = (1..=3)
        .rev()
        .map(|i| iso(today - Duration::days(i)))
        .collect();

    daterange_cmd()
        .args(["-f", "%Y-%m-%d", "-s", "3daysago", "-e", "1dayago", "-d", " "])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.join(" ")));
}

#[test]
fn test_relative_keywords_are_case_sensitive() {
    daterange_cmd()
        .args(["-s", "Today"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'Today'"));

    daterange_cmd()
        .args(["-s", "3DaysAgo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'3DaysAgo'"));
}

#[test]
fn test_empty_start_means_today() {
    let today = Local::now().date_naive();

    daterange_cmd()
        .args(["-f", "%Y-%m-%d", "-s", "", "-c", "1"])
        .assert()
        .success()
        .stdout(format!("{}\n", iso(today)));
}

#[test]
fn test_days_ago_needs_ascii_digits() {
    daterange_cmd()
        .args(["-s", "\u{663}daysago"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unparseable date"));
}
