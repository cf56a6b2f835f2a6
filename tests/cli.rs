use assert_cmd::Command;
use mockito::{Matcher, Mock, Server, ServerGuard};
use predicates::prelude::*;
use serde_json::json;

const TEMPLATE: &str = "This PR needs one of the following labels: {}";
const MESSAGE: &str = "This PR needs one of the following labels: bug, feature";

fn verify(server: &ServerGuard, args: [&str; 4]) -> Command {
    let mut cmd = Command::cargo_bin("verify-pr-labels").unwrap();
    cmd.args(args)
        .env("GITHUB_REPOSITORY", "owner/repo")
        .env("GITHUB_REF", "refs/pull/7/merge")
        .env("GITHUB_EVENT_NAME", "pull_request")
        .env("GITHUB_API_URL", server.url())
        .env_remove("RUST_LOG");
    cmd
}

fn mock_pull_request(server: &mut ServerGuard, labels: &[&str], comments: &[&str]) -> Vec<Mock> {
    let labels: Vec<_> = labels.iter().map(|name| json!({ "name": name })).collect();
    let comments: Vec<_> = comments
        .iter()
        .enumerate()
        .map(|(id, body)| json!({ "id": id, "body": body }))
        .collect();

    vec![
        server
            .mock("GET", "/repos/owner/repo")
            .with_body(r#"{"full_name": "owner/repo"}"#)
            .create(),
        server
            .mock("GET", "/repos/owner/repo/pulls/7")
            .with_body(r#"{"number": 7, "title": "Some change", "state": "open"}"#)
            .create(),
        server
            .mock("GET", "/repos/owner/repo/issues/7/labels")
            .match_query(Matcher::Any)
            .with_body(json!(labels).to_string())
            .create(),
        server
            .mock("GET", "/repos/owner/repo/issues/7/comments")
            .match_query(Matcher::Any)
            .with_body(json!(comments).to_string())
            .create(),
    ]
}

fn mock_create_comment(server: &mut ServerGuard, expected: usize) -> Mock {
    server
        .mock("POST", "/repos/owner/repo/issues/7/comments")
        .match_header("authorization", "Bearer token")
        .match_body(Matcher::Json(json!({ "body": MESSAGE })))
        .with_status(201)
        .with_body(json!({ "id": 100, "body": MESSAGE }).to_string())
        .expect(expected)
        .create()
}

#[test]
fn passes_when_an_allowed_label_is_present() {
    let mut server = Server::new();
    let _pr = mock_pull_request(&mut server, &["bug", "urgent"], &[]);
    let create = mock_create_comment(&mut server, 0);

    verify(&server, ["token", "bug,feature", "", TEMPLATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid labels are: bug, feature"))
        .stdout(predicate::str::contains(
            "This pull request contains the following valid labels: bug",
        ));

    create.assert();
}

#[test]
fn comments_and_fails_when_no_allowed_label_is_present() {
    let mut server = Server::new();
    let _pr = mock_pull_request(&mut server, &["wontfix"], &[]);
    let create = mock_create_comment(&mut server, 1);

    verify(&server, ["token", " bug , feature ", "", TEMPLATE])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "does not contain any of the valid labels: bug, feature",
        ))
        .stderr(predicate::str::contains("Exiting with an error code"));

    create.assert();
}

#[test]
fn does_not_repeat_an_existing_comment() {
    let mut server = Server::new();
    let _pr = mock_pull_request(&mut server, &["wontfix"], &[MESSAGE]);
    let create = mock_create_comment(&mut server, 0);

    verify(&server, ["token", "bug,feature", "", TEMPLATE])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Exiting with an error code"));

    create.assert();
}

#[test]
fn posts_a_template_starting_with_a_hyphen() {
    let mut server = Server::new();
    let _pr = mock_pull_request(&mut server, &["wontfix"], &[]);
    let create = server
        .mock("POST", "/repos/owner/repo/issues/7/comments")
        .match_body(Matcher::Json(json!({ "body": "- Please add one of: bug" })))
        .with_status(201)
        .with_body(json!({ "id": 101, "body": "- Please add one of: bug" }).to_string())
        .expect(1)
        .create();

    verify(&server, ["token", "bug", "", "- Please add one of: {}"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Exiting with an error code"));

    create.assert();
}

#[test]
fn keeps_diagnostic_logs_off_stdout() {
    let mut server = Server::new();
    let _pr = mock_pull_request(&mut server, &["bug"], &[]);

    verify(&server, ["token", "bug", "", TEMPLATE])
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("valid labels: bug"))
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn reads_pr_number_input_on_pull_request_target() {
    let mut server = Server::new();
    let _pr = mock_pull_request(&mut server, &["feature"], &[]);

    verify(&server, ["token", "bug,feature", "7", TEMPLATE])
        .env("GITHUB_EVENT_NAME", "pull_request_target")
        .env("GITHUB_REF", "refs/heads/main")
        .assert()
        .success()
        .stdout(predicate::str::contains("valid labels: feature"));
}

#[test]
fn fails_without_token_before_any_request() {
    let mut server = Server::new();
    let get = server.mock("GET", Matcher::Any).expect(0).create();
    let post = server.mock("POST", Matcher::Any).expect(0).create();

    verify(&server, ["", "bug,feature", "", TEMPLATE])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR: A token must be provided!"));

    get.assert();
    post.assert();
}

#[test]
fn fails_on_missing_environment_variable() {
    let server = Server::new();

    verify(&server, ["token", "bug", "", TEMPLATE])
        .env_remove("GITHUB_EVENT_NAME")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GITHUB_EVENT_NAME"));
}

#[test]
fn fails_on_invalid_pr_number_input() {
    let server = Server::new();

    verify(&server, ["token", "bug", "not-a-number", TEMPLATE])
        .env("GITHUB_EVENT_NAME", "pull_request_target")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not-a-number"));
}

#[test]
fn fails_when_ref_is_not_a_pull_request() {
    let server = Server::new();

    verify(&server, ["token", "bug", "", TEMPLATE])
        .env("GITHUB_REF", "refs/heads/main")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("refs/heads/main"));
}

#[test]
fn fails_on_platform_error() {
    let mut server = Server::new();
    let _repo = server
        .mock("GET", "/repos/owner/repo")
        .with_status(500)
        .create();

    verify(&server, ["token", "bug", "", TEMPLATE])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot verify the pull request labels"));
}

#[test]
fn fails_on_missing_arguments() {
    let mut cmd = Command::cargo_bin("verify-pr-labels").unwrap();

    cmd.arg("token").assert().code(1);
}
