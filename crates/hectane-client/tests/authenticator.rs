use serde_json::json;

use hectane_client::{Authenticator, Client, ClientConfig, Error};
use hectane_testkit::http::{Method, StatusCode};
use hectane_testkit::{MockBackend, Reply};
use hectane_types::LoginRequest;

async fn setup() -> (MockBackend, Client) {
    let backend = MockBackend::start().await.unwrap();
    let url = backend.url();
    let config = ClientConfig::from_lookup(|key| (key == "HECTANE_URL").then(|| url.clone())).unwrap();
    (backend, Client::new(config).unwrap())
}

fn credentials() -> LoginRequest {
    LoginRequest {
        username: "admin".into(),
        password: "correct horse".into(),
    }
}

#[tokio::test]
async fn authenticate_resolves_with_exact_body() {
    let (backend, client) = setup().await;
    let payload = json!({
        "user": {"id": 1, "username": "admin", "is_admin": true},
        "flags": [1, 2, 3]
    });
    backend.on(Method::POST, "/api/auth/login", Reply::json(payload.clone()));

    let resolved = client.authenticator().authenticate(&credentials()).await.unwrap();
    assert_eq!(resolved, payload);

    let sent = backend.requests_to(&Method::POST, "/api/auth/login");
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].json(),
        Some(json!({"username": "admin", "password": "correct horse"}))
    );
}

#[tokio::test]
async fn authenticate_rejects_with_literal_text() {
    let (backend, client) = setup().await;
    backend.on(
        Method::POST,
        "/api/auth/login",
        Reply::text(StatusCode::FORBIDDEN, "Forbidden\n"),
    );

    let err = client
        .authenticator()
        .authenticate(&credentials())
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Forbidden\n");
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
}

#[tokio::test]
async fn invalidate_posts_to_logout_without_body() {
    let (backend, client) = setup().await;
    backend.on(Method::POST, "/api/auth/logout", Reply::ok());

    let resolved = client.authenticator().invalidate().await.unwrap();
    assert!(resolved.is_null());

    let sent = backend.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].path, "/api/auth/logout");
    assert!(sent[0].body.is_empty());
}

#[tokio::test]
async fn restore_always_rejects() {
    let (backend, client) = setup().await;
    backend.accept_login(json!({"user": {"id": 1, "username": "admin"}}));

    let authenticator = client.authenticator();
    let stored = authenticator.authenticate(&credentials()).await.unwrap();

    assert!(matches!(
        authenticator.restore(Some(&stored)).await,
        Err(Error::RestoreUnsupported)
    ));
    assert!(matches!(
        authenticator.restore(None).await,
        Err(Error::RestoreUnsupported)
    ));
    // restore never reaches the backend
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn session_lifecycle_against_backend() {
    let (backend, client) = setup().await;
    backend.accept_login(json!({"user": {"id": 9, "username": "root", "is_admin": true}}));

    let mut session = client.session();
    session.authenticate("root", "pw").await.unwrap();
    assert_eq!(session.current_user().unwrap().id, 9);

    // a failed restore destroys the session
    assert!(session.restore().await.is_err());
    assert!(!session.is_authenticated());

    session.authenticate("root", "pw").await.unwrap();
    session.invalidate().await.unwrap();
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn legacy_auth_paths_are_configurable() {
    let backend = MockBackend::start().await.unwrap();
    backend
        .on(Method::POST, "/api/login", Reply::ok())
        .on(Method::POST, "/api/logout", Reply::ok());

    let url = backend.url();
    let config = ClientConfig::from_lookup(|key| match key {
        "HECTANE_URL" => Some(url.clone()),
        "HECTANE_LOGIN_PATH" => Some("/api/login".into()),
        "HECTANE_LOGOUT_PATH" => Some("/api/logout".into()),
        _ => None,
    })
    .unwrap();
    let authenticator = Client::new(config).unwrap().authenticator();

    authenticator.authenticate(&credentials()).await.unwrap();
    authenticator.invalidate().await.unwrap();

    let paths: Vec<String> = backend.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/api/login", "/api/logout"]);
}
