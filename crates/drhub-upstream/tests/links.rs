//! Link checker behavior against a wiremock server.

use std::time::Duration;

use drhub_upstream::{extract_links, LinkChecker, LinkError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn checker() -> LinkChecker {
    LinkChecker::new(Duration::from_secs(2), Duration::ZERO).expect("checker should build")
}

#[tokio::test]
async fn head_success_is_healthy() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    assert!(checker().check(&format!("{}/ok", server.uri())).await);
}

#[tokio::test]
async fn method_not_allowed_falls_back_to_get() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/no-head"))
        .respond_with(ResponseTemplate::new(405))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/no-head"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert!(checker().check(&format!("{}/no-head", server.uri())).await);
}

#[tokio::test]
async fn client_and_server_errors_are_broken() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let checker = checker();
    assert!(!checker.check(&format!("{}/gone", server.uri())).await);
    assert!(!checker.check(&format!("{}/down", server.uri())).await);
}

#[tokio::test]
async fn slow_response_times_out_as_broken() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let checker =
        LinkChecker::new(Duration::from_millis(200), Duration::ZERO).expect("checker should build");
    assert!(!checker.check(&format!("{}/slow", server.uri())).await);
}

#[tokio::test]
async fn verify_reports_broken_count() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let readme = format!(
        "# Awesome DevRel\n- [A]({uri}/a)\n- {uri}/b\n- [A again]({uri}/a)\n",
        uri = server.uri()
    );
    let report = checker().verify(extract_links(&readme)).await;

    assert_eq!(report.total_links, 2);
    assert_eq!(report.broken_links, 1);
    assert_eq!(report.results[0].title, "A");
    assert!(report.results[0].status);
    assert_eq!(report.results[1].title, "");
    assert!(!report.results[1].status);
}

#[tokio::test]
async fn verify_readme_uses_first_readable_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let readme = dir.path().join("README.md");
    std::fs::write(&readme, format!("[Home]({}/home)", server.uri())).unwrap();

    let report = checker()
        .verify_readme(&[dir.path().join("missing.md"), readme])
        .await
        .expect("second candidate is readable");
    assert_eq!(report.total_links, 1);
    assert_eq!(report.broken_links, 0);
}

#[tokio::test]
async fn verify_readme_without_any_candidate_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = checker()
        .verify_readme(&[dir.path().join("missing.md")])
        .await
        .unwrap_err();
    assert!(matches!(err, LinkError::ReadmeNotFound { .. }));
}
