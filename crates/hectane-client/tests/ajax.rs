use serde_json::json;
use url::Url;

use hectane_client::{Ajax, ClientConfig, Error};
use hectane_testkit::http::{Method, StatusCode};
use hectane_testkit::{MockBackend, Reply, SESSION_COOKIE};

async fn setup() -> (MockBackend, Ajax) {
    let backend = MockBackend::start().await.unwrap();
    let config = ClientConfig::new(Url::parse(&backend.url()).unwrap());
    let ajax = Ajax::new(&config).unwrap();
    (backend, ajax)
}

#[tokio::test]
async fn no_payload_issues_get_and_resolves_json() {
    let (backend, ajax) = setup().await;
    backend.on(
        Method::GET,
        "/api/admin/users",
        Reply::json(json!([{"id": 1, "username": "admin", "is_admin": true}])),
    );

    let body = ajax.request("/api/admin/users", None).await.unwrap();
    assert_eq!(body[0]["username"], "admin");

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn object_payload_issues_json_post() {
    let (backend, ajax) = setup().await;
    backend.on(
        Method::POST,
        "/api/folders/new",
        Reply::json(json!({"id": 4, "name": "Invoices", "user_id": 1})),
    );

    let body = ajax
        .request("/api/folders/new", Some(json!({"name": "Invoices"})))
        .await
        .unwrap();
    assert_eq!(body["id"], 4);

    let sent = backend.requests_to(&Method::POST, "/api/folders/new");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body_text(), r#"{"name":"Invoices"}"#);
    assert_eq!(
        sent[0].header("content-type"),
        Some("application/json;charset=utf-8")
    );
}

#[tokio::test]
async fn failure_rejects_with_raw_response_text() {
    let (backend, ajax) = setup().await;
    backend.on(
        Method::GET,
        "/api/folders",
        Reply::text(StatusCode::FORBIDDEN, "Forbidden\n"),
    );

    match ajax.get("/api/folders").await {
        Err(Error::Rejected { status, body }) => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body, "Forbidden\n");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_endpoint_is_rejected_not_retried() {
    let (backend, ajax) = setup().await;

    let err = ajax.get("/api/nowhere").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn bad_url_fails_before_any_request() {
    let (backend, ajax) = setup().await;

    let err = ajax.request("api/folders", None).await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl { .. }));
    assert!(ajax.prepare("", Some(json!({}))).is_err());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn empty_post_sends_no_body() {
    let (backend, ajax) = setup().await;
    backend.on(Method::POST, "/api/auth/logout", Reply::ok());

    let body = ajax.post_empty("/api/auth/logout").await.unwrap();
    assert!(body.is_null());

    let sent = backend.requests();
    assert_eq!(sent[0].method, Method::POST);
    assert!(sent[0].body.is_empty());
    assert_eq!(sent[0].header("content-type"), None);
}

#[tokio::test]
async fn session_cookie_is_sent_on_later_requests() {
    let (backend, ajax) = setup().await;
    backend
        .accept_login(json!({"user": {"id": 1, "username": "admin"}}))
        .on(Method::GET, "/api/folders", Reply::json(json!([])));

    ajax.request(
        "/api/auth/login",
        Some(json!({"username": "admin", "password": "secret"})),
    )
    .await
    .unwrap();
    ajax.get("/api/folders").await.unwrap();

    let listed = backend.requests_to(&Method::GET, "/api/folders");
    let cookie = listed[0].header("cookie").unwrap_or_default();
    assert!(cookie.contains(SESSION_COOKIE), "cookie header: {cookie:?}");
}

#[tokio::test]
async fn success_with_non_json_body_is_a_decode_error() {
    let (backend, ajax) = setup().await;
    backend.on(
        Method::GET,
        "/api/folders",
        Reply::text(StatusCode::OK, "<html>oops</html>"),
    );

    match ajax.get("/api/folders").await {
        Err(Error::Decode { body, .. }) => assert_eq!(body, "<html>oops</html>"),
        other => panic!("expected decode error, got {other:?}"),
    }
}
