#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn contactz(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("contactz"));
    cmd.arg("--dir").arg(dir.path()).env_remove("CONTACTZ_LOG");
    cmd
}

fn add(dir: &TempDir, name: &str, phone: &str, category: &str) {
    contactz(dir)
        .args(["add", name, phone, "--category", category])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Added: {}", name)));
}

#[test]
fn add_list_and_filter() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Ann", "1", "Family");
    add(&dir, "Bob", "2", "Work");

    contactz(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann"))
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Total Contacts: 2"));

    contactz(&dir)
        .args(["list", "--category", "Family"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann"))
        .stdout(predicate::str::contains("Bob").not());

    contactz(&dir)
        .args(["search", "BO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Ann").not());
}

#[test]
fn duplicate_phone_is_rejected() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Ann", "1", "Family");

    contactz(&dir)
        .args(["add", "Cal", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phone number already exists"));

    let raw = fs::read_to_string(dir.path().join("contacts.json")).unwrap();
    assert!(!raw.contains("Cal"));
}

#[test]
fn edit_keeps_id_and_other_fields() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Ann", "1", "Family");
    let before: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("contacts.json")).unwrap())
            .unwrap();

    contactz(&dir)
        .args(["edit", "1", "--name", "Anne"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: Anne"));

    let after: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("contacts.json")).unwrap())
            .unwrap();
    assert_eq!(after[0]["id"], before[0]["id"]);
    assert_eq!(after[0]["name"], "Anne");
    assert_eq!(after[0]["phone"], "1");
    assert_eq!(after[0]["category"], "Family");
}

#[test]
fn edit_without_selection_warns() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Ann", "1", "Family");

    contactz(&dir)
        .args(["edit", "--name", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Select a contact first"));
}

#[test]
fn delete_asks_for_confirmation() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Ann", "1", "Family");

    contactz(&dir)
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled."));

    contactz(&dir)
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: Ann"));

    contactz(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0"));
}

#[test]
fn export_names_file_after_count() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Ann", "1", "Family");
    add(&dir, "Doe, Jane", "2", "Work");

    contactz(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts_export_2.csv"));

    let csv = fs::read_to_string(dir.path().join("contacts_export_2.csv")).unwrap();
    assert!(csv.starts_with("Name,Phone,Email,Category,ID\r\n"));
    assert!(csv.contains("\"Doe, Jane\",2,,Work,CT"));
}

#[test]
fn export_into_fresh_directory() {
    let root = TempDir::new().unwrap();
    let book = root.path().join("book");

    Command::new(cargo_bin("contactz"))
        .arg("--dir")
        .arg(&book)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts_export_0.csv"));

    let csv = fs::read_to_string(book.join("contacts_export_0.csv")).unwrap();
    assert_eq!(csv, "Name,Phone,Email,Category,ID\r\n");
}

#[test]
fn stats_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Ann", "1", "Work");
    add(&dir, "Bob", "2", "Family");
    add(&dir, "Cal", "3", "Work");

    contactz(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 3\nWork: 2\nFamily: 1"));
}

#[test]
fn random_on_empty_book_is_informational() {
    let dir = TempDir::new().unwrap();
    contactz(&dir)
        .arg("random")
        .assert()
        .success()
        .stdout(predicate::str::contains("add some contacts first"));
}

#[test]
fn corrupt_data_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("contacts.json"), "[{\"name\": ").unwrap();

    contactz(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn legacy_id_style_from_config() {
    let dir = TempDir::new().unwrap();
    contactz(&dir)
        .args(["config", "id-style", "legacy"])
        .assert()
        .success();
    add(&dir, "Ann", "1", "Family");

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("contacts.json")).unwrap())
            .unwrap();
    let id = raw[0]["id"].as_str().unwrap();
    assert_eq!(id.len(), 6);
    assert!(id.starts_with("CT"));
}
