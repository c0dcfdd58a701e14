use assert_cmd::Command;
use predicates::prelude::*;

fn bookshelf_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bookshelf"))
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    bookshelf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL endpoint"));
}

#[test]
fn test_version() {
    bookshelf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookshelf"));
}

// =============================================================================
// Query command
// =============================================================================

#[test]
fn test_query_book_by_id() {
    bookshelf_cmd()
        .args(["query", "{ book(id: 1) { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Harry Potter and the Chamber of Secrets",
        ));
}

#[test]
fn test_query_with_variables() {
    bookshelf_cmd()
        .args([
            "query",
            "query($id: Int) { book(id: $id) { name } }",
            "--variables",
            r#"{"id": 4}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fellowship of the Ring"));
}

#[test]
fn test_mutation_returns_created_record() {
    bookshelf_cmd()
        .args([
            "query",
            r#"mutation { addAuthor(name: "Brandon Sanderson") { id name } }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brandon Sanderson").and(predicate::str::contains("4")));
}

#[test]
fn test_malformed_document_reports_errors() {
    bookshelf_cmd()
        .args(["query", "{ books {"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_invalid_variables_json_fails() {
    bookshelf_cmd()
        .args(["query", "{ books { id } }", "--variables", "not-json"])
        .assert()
        .failure();
}
