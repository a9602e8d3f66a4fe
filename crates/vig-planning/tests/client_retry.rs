//! Bounded 401 retry behavior of the planning client, against a local
//! canned-response backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use vig_auth::{AuthClient, SessionManager, StoredCredentials, TokenStore};
use vig_planning::{PlanningClient, PlanningError};

struct MockBackend {
    base_url: String,
    planning_hits: Arc<AtomicUsize>,
    refresh_hits: Arc<AtomicUsize>,
}

/// Backend where `/planning/` replies 401 for the first `reject_first`
/// requests, then 200 with one record. `/token/refresh/` honors or rejects
/// refreshes; `/me/` always succeeds so a session can bootstrap.
fn spawn_backend(reject_first: usize, refresh_ok: bool) -> MockBackend {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend");
    let addr = server.server_addr().to_ip().expect("ip listen addr");
    let planning_hits = Arc::new(AtomicUsize::new(0));
    let refresh_hits = Arc::new(AtomicUsize::new(0));

    let thread_planning = Arc::clone(&planning_hits);
    let thread_refresh = Arc::clone(&refresh_hits);
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let (status, body) = match request.url() {
                "/planning/" => {
                    let hit = thread_planning.fetch_add(1, Ordering::SeqCst);
                    if hit < reject_first {
                        (401, String::new())
                    } else {
                        (
                            200,
                            r#"[{"id": 5, "date": "2024-03-05", "document_count": 1}]"#.to_string(),
                        )
                    }
                }
                "/token/refresh/" => {
                    thread_refresh.fetch_add(1, Ordering::SeqCst);
                    if refresh_ok {
                        (200, r#"{"access": "access_new"}"#.to_string())
                    } else {
                        (401, String::new())
                    }
                }
                "/me/" => (
                    200,
                    r#"{"id": 42, "email": "user@vigil.test", "role": "inspector", "is_superuser": false}"#
                        .to_string(),
                ),
                _ => (404, String::new()),
            };
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json")
                        .expect("content-type header"),
                );
            let _ = request.respond(response);
        }
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        planning_hits,
        refresh_hits,
    }
}

async fn authenticated_session(backend: &MockBackend, dir: &std::path::Path) -> SessionManager {
    TokenStore::file_only(dir)
        .store(&StoredCredentials {
            access_token: "access_0".into(),
            refresh_token: "refresh_0".into(),
            user_id: "42".into(),
            role: "inspector".into(),
        })
        .unwrap();
    let client = AuthClient::new(reqwest::Client::new(), backend.base_url.clone());
    let mut session = SessionManager::new(client, TokenStore::file_only(dir));
    session.bootstrap().await;
    assert!(session.is_authenticated(), "bootstrap against mock failed");
    session
}

#[tokio::test]
async fn a_401_triggers_one_refresh_and_one_retry() {
    let backend = spawn_backend(1, true);
    let tmp = tempfile::TempDir::new().unwrap();
    let mut session = authenticated_session(&backend, tmp.path()).await;
    let client = PlanningClient::new(reqwest::Client::new(), backend.base_url.clone());

    let records = client.fetch_own(&mut session).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 5);
    assert_eq!(backend.planning_hits.load(Ordering::SeqCst), 2);
    assert_eq!(backend.refresh_hits.load(Ordering::SeqCst), 1);
    assert_eq!(session.access_token(), Some("access_new"));
}

#[tokio::test]
async fn a_second_401_fails_instead_of_retrying_again() {
    let backend = spawn_backend(usize::MAX, true);
    let tmp = tempfile::TempDir::new().unwrap();
    let mut session = authenticated_session(&backend, tmp.path()).await;
    let client = PlanningClient::new(reqwest::Client::new(), backend.base_url.clone());

    let error = client.fetch_own(&mut session).await.unwrap_err();

    assert!(matches!(error, PlanningError::Api { status: 401, .. }));
    assert_eq!(
        backend.planning_hits.load(Ordering::SeqCst),
        2,
        "retry must be bounded to one"
    );
}

#[tokio::test]
async fn a_failed_refresh_propagates_and_clears_the_session() {
    let backend = spawn_backend(usize::MAX, false);
    let tmp = tempfile::TempDir::new().unwrap();
    let mut session = authenticated_session(&backend, tmp.path()).await;
    let client = PlanningClient::new(reqwest::Client::new(), backend.base_url.clone());

    let error = client.fetch_own(&mut session).await.unwrap_err();

    assert!(matches!(error, PlanningError::Auth(_)));
    assert!(!session.is_authenticated(), "failed refresh forces logout");
    assert_eq!(backend.planning_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unauthenticated_sessions_never_reach_the_network() {
    let backend = spawn_backend(0, true);
    let tmp = tempfile::TempDir::new().unwrap();
    let auth = AuthClient::new(reqwest::Client::new(), backend.base_url.clone());
    let mut session = SessionManager::new(auth, TokenStore::file_only(tmp.path()));
    let client = PlanningClient::new(reqwest::Client::new(), backend.base_url.clone());

    let error = client.fetch_own(&mut session).await.unwrap_err();

    assert!(matches!(error, PlanningError::NotAuthenticated));
    assert_eq!(backend.planning_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn inspector_listing_parses() {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend");
    let addr = server.server_addr().to_ip().expect("ip listen addr");
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let (status, body) = match request.url() {
                "/calendar/" => (
                    200,
                    r#"[{"id": 3, "first_name": "Nadia", "last_name": "Roche"}]"#.to_string(),
                ),
                "/me/" => (
                    200,
                    r#"{"id": 1, "email": "sup@vigil.test", "role": "supervisor", "is_superuser": false}"#
                        .to_string(),
                ),
                _ => (404, String::new()),
            };
            let _ = request.respond(
                tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json")
                            .expect("content-type header"),
                    ),
            );
        }
    });
    let base_url = format!("http://{addr}");

    let tmp = tempfile::TempDir::new().unwrap();
    TokenStore::file_only(tmp.path())
        .store(&StoredCredentials {
            access_token: "access_0".into(),
            refresh_token: "refresh_0".into(),
            user_id: "1".into(),
            role: "supervisor".into(),
        })
        .unwrap();
    let mut session = SessionManager::new(
        AuthClient::new(reqwest::Client::new(), base_url.clone()),
        TokenStore::file_only(tmp.path()),
    );
    session.bootstrap().await;

    let client = PlanningClient::new(reqwest::Client::new(), base_url);
    let inspectors = client.list_inspectors(&mut session).await.unwrap();

    assert_eq!(inspectors.len(), 1);
    assert_eq!(inspectors[0].full_name(), "Nadia Roche");
}
