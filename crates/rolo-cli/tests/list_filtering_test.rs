mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn query_filters_case_insensitively() {
    let fixture = TestFixture::new();
    fixture.add_contact("Ann", "Lee", "ann@example.com", "111");
    fixture.add_contact("Raj", "Iyer", "raj@example.com", "222");

    let hits = fixture.list_json(&["--query", "ANN"]);
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["first_name"], "Ann");

    // Last names match too.
    let hits = fixture.list_json(&["--query", "iyer"]);
    assert_eq!(hits.as_array().unwrap().len(), 1);
}

#[test]
fn unmatched_query_reports_the_query_in_plain_mode() {
    let fixture = TestFixture::new();
    fixture.add_contact("Ann", "Lee", "ann@example.com", "111");

    fixture
        .command()
        .arg("list")
        .arg("--query")
        .arg("zzz")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found for \"zzz\""));
}

#[test]
fn empty_book_reports_no_contacts_available() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts available."));
}

#[test]
fn limit_caps_the_row_count() {
    let fixture = TestFixture::new();
    for (first, phone) in [("Ann", "1"), ("Bea", "2"), ("Cal", "3")] {
        fixture.add_contact(first, "Lee", "x@example.com", phone);
    }

    let limited = fixture.list_json(&["--limit", "2"]);
    assert_eq!(limited.as_array().unwrap().len(), 2);
}

#[test]
fn grouped_mode_prints_letter_headings() {
    let fixture = TestFixture::new();
    fixture.add_contact("Ann", "Lee", "ann@example.com", "111");
    fixture.add_contact("Bea", "Kaur", "bea@example.com", "222");

    fixture
        .command()
        .arg("list")
        .arg("--grouped")
        .assert()
        .success()
        .stdout(predicate::str::contains("Index:"))
        .stdout(predicate::str::contains("A"))
        .stdout(predicate::str::contains("B"));
}
