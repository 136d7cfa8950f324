use assert_cmd::Command;
use mockito::Matcher;
use predicates::prelude::*;

fn fga() -> Command {
    let mut cmd = Command::cargo_bin("fga").unwrap();
    cmd.env_remove("FGA_API_URL")
        .env_remove("FGA_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn create_prints_canonical_store() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/stores")
        .match_body(Matcher::Json(serde_json::json!({"name": "foo"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id":"12345","name":"foo","created_at":"2009-11-10T23:00:00.123Z","updated_at":"2009-11-10T23:00:00.123Z"}"#,
        )
        .create();

    fga()
        .args(["--api-url", &server.url(), "stores", "create", "foo"])
        .assert()
        .success()
        .stdout(
            "{\"created_at\":\"2009-11-10T23:00:00Z\",\"id\":\"12345\",\"name\":\"foo\",\"updated_at\":\"2009-11-10T23:00:00Z\"}\n",
        );

    mock.assert();
}

#[test]
fn create_reports_server_error() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/stores")
        .with_status(400)
        .with_body(r#"{"code":"validation_error","message":"invalid CreateStoreRequest.Name"}"#)
        .create();

    fga()
        .args(["--api-url", &server.url(), "stores", "create", "x"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "failed to create store due to server returned 400: invalid CreateStoreRequest.Name",
        ));
}

#[test]
fn list_prints_all_stores_on_last_page() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/stores")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"stores":[{"id":"1","name":"a","created_at":"2023-01-01T00:00:00Z","updated_at":"2023-01-01T00:00:00Z"},{"id":"2","name":"b","created_at":"2023-01-02T00:00:00Z","updated_at":"2023-01-03T00:00:00.5Z"}],"continuation_token":""}"#,
        )
        .expect(1)
        .create();

    fga()
        .args(["stores", "list", "--api-url", &server.url()])
        .assert()
        .success()
        .stdout(concat!(
            r#"{"stores":["#,
            r#"{"created_at":"2023-01-01T00:00:00Z","id":"1","name":"a","updated_at":"2023-01-01T00:00:00Z"},"#,
            r#"{"created_at":"2023-01-02T00:00:00Z","id":"2","name":"b","updated_at":"2023-01-03T00:00:00Z"}"#,
            "]}\n"
        ));
}

#[test]
fn list_empty_prints_empty_array() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/stores")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"stores":[]}"#)
        .create();

    fga()
        .args(["--api-url", &server.url(), "stores", "list"])
        .assert()
        .success()
        .stdout("{\"stores\":[]}\n");
}

#[test]
fn list_with_page_cap_of_one_makes_one_request() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/stores")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"stores":[{"id":"1","name":"a","created_at":"2023-01-01T00:00:00Z","updated_at":"2023-01-01T00:00:00Z"}],"continuation_token":"more"}"#,
        )
        .expect(1)
        .create();

    fga()
        .args(["--api-url", &server.url(), "stores", "list", "--max-pages", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id":"1""#));

    mock.assert();
}

#[test]
fn list_rejects_zero_max_pages() {
    fga()
        .args(["stores", "list", "--max-pages", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-pages"));
}

#[test]
fn invalid_api_url_is_reported() {
    fga()
        .args(["--api-url", "not a url", "stores", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to initialize FGA client"));
}

#[test]
fn rejects_zero_timeout() {
    fga()
        .args(["--timeout", "0", "stores", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--timeout"));
}
