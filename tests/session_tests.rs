mod common;
use clap::Parser;
use common::{FakeTransport, client, login_json, temp_path};
use kivo::api::{Auth, Endpoint, Transport, extract_detail};
use kivo::cli::commands::AppContext;
use kivo::cli::parser::Cli;
use kivo::config::Config;
use kivo::dispatch_and_settle;
use kivo::errors::{AppError, ErrorKind, GENERIC_REQUEST_ERROR};
use kivo::models::{Capability, Role};
use kivo::session::{SessionStorage, SessionStore};
use reqwest::Method;
use serde_json::json;
use std::fs;
use std::path::Path;
use std::sync::Arc;

fn store(name: &str) -> (SessionStore, String) {
    let path = temp_path(name, "json");
    let store = SessionStore::hydrate(SessionStorage::new(&path)).expect("hydrate");
    (store, path)
}

#[tokio::test]
async fn login_success_persists_tokens_and_user() {
    let fake = FakeTransport::new();
    fake.reply(200, login_json("trabajador"));
    let (mut store, path) = store("login_success");

    let session = store
        .login(&client(&fake, None), "12345678-5", "secret")
        .await
        .expect("login");
    assert_eq!(session.access_token, "acc-123");
    assert_eq!(session.role(), Role::Trabajador);
    assert_eq!(session.user.display_name(), "Juan Pérez");

    let saved = fs::read_to_string(&path).expect("session file");
    assert!(saved.contains("\"accessToken\""));
    assert!(saved.contains("\"refreshToken\""));
    assert!(saved.contains("\"user\""));

    let req = &fake.requests()[0];
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "token/");
    assert_eq!(req.bearer, None);
    assert_eq!(req.body, Some(json!({"rut": "12345678-5", "password": "secret"})));

    // survives a restart
    let again = SessionStore::hydrate(SessionStorage::new(&path)).unwrap();
    assert_eq!(again.current().map(|s| s.refresh_token.as_str()), Some("ref-456"));
}

#[tokio::test]
async fn wrong_password_persists_nothing() {
    let fake = FakeTransport::new();
    fake.reply(401, json!({"detail": "No active account found with the given credentials"}));
    let (mut store, path) = store("login_wrong_password");

    let err = store
        .login(&client(&fake, None), "12345678-5", "nope")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
    assert_eq!(err.to_string(), "Usuario o contraseña incorrectos");
    assert!(store.current().is_none());
    assert!(!Path::new(&path).exists());
}

#[tokio::test]
async fn empty_credentials_never_reach_the_network() {
    let fake = FakeTransport::new();
    let (mut store, _) = store("login_empty");

    let err = store.login(&client(&fake, None), " ", "").await.unwrap_err();
    match err {
        AppError::Validation(fields) => {
            assert!(fields.contains_key("rut"));
            assert!(fields.contains_key("password"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fake.count(), 0);
}

#[tokio::test]
async fn logout_clears_storage_and_memory() {
    let fake = FakeTransport::new();
    fake.reply(200, login_json("admin_rrhh"));
    let (mut store, path) = store("logout_clears");

    store.login(&client(&fake, None), "1-9", "x").await.unwrap();
    assert!(Path::new(&path).exists());

    store.logout().unwrap();
    assert!(store.current().is_none());
    assert!(!Path::new(&path).exists());
    assert!(matches!(store.require(), Err(AppError::InvalidSession)));

    // second logout is a no-op
    store.logout().unwrap();
}

#[test]
fn corrupt_session_file_means_logged_out() {
    let path = temp_path("corrupt_session", "json");
    fs::write(&path, "{ not json").unwrap();
    let store = SessionStore::hydrate(SessionStorage::new(&path)).unwrap();
    assert!(store.current().is_none());
}

#[tokio::test]
async fn client_from_store_carries_bearer_token() {
    let fake = FakeTransport::new();
    fake.reply(200, login_json("fiscalizador"));
    fake.reply(200, json!([]));
    let (mut store, _) = store("store_client_bearer");

    store.login(&client(&fake, None), "1-9", "x").await.unwrap();
    let session = store.require().unwrap();
    assert!(session.can(Capability::ViewAudit));
    assert!(session.require(Capability::ManageUsers).is_err());

    let api = store.client(fake.clone());
    let entries = api.audit(Some(1)).await.unwrap();
    assert!(entries.is_empty());

    let req = &fake.requests()[1];
    assert_eq!(req.bearer.as_deref(), Some("acc-123"));
    assert_eq!(req.path, "auditoria/");
    assert_eq!(req.query, vec![("empresa_id".to_string(), "1".to_string())]);
}

#[tokio::test]
async fn authenticated_call_without_token_short_circuits() {
    let fake = FakeTransport::new();
    let api = client(&fake, None);

    let err = api.attendance_status().await.unwrap_err();
    assert!(matches!(err, AppError::InvalidSession));
    assert_eq!(err.kind(), ErrorKind::Auth);
    assert_eq!(fake.count(), 0);
}

#[tokio::test]
async fn rejected_token_is_an_invalid_session() {
    let fake = FakeTransport::new();
    fake.reply(401, json!({"detail": "Token inválido"}));

    let err = client(&fake, Some("expired")).attendance().await.unwrap_err();
    assert!(matches!(err, AppError::InvalidSession));
}

#[tokio::test]
async fn request_errors_carry_detail_or_generic_message() {
    let fake = FakeTransport::new();
    fake.reply(403, json!({"detail": "Solo trabajadores pueden crear licencias"}));
    fake.reply(500, serde_json::Value::Null);
    let api = client(&fake, Some("t"));

    let err = api.licenses().await.unwrap_err();
    assert_eq!(err.to_string(), "Solo trabajadores pueden crear licencias");
    match err {
        AppError::Request { status, detail } => {
            assert_eq!(status, 403);
            assert_eq!(detail, "Solo trabajadores pueden crear licencias");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    match api.vacations().await.unwrap_err() {
        AppError::Request { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, GENERIC_REQUEST_ERROR);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn network_errors_pass_through() {
    let fake = FakeTransport::new();
    fake.fail_network();
    let err = client(&fake, Some("t")).companies().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[test]
fn login_is_the_only_anonymous_endpoint() {
    assert_eq!(Endpoint::login().auth, Auth::Anonymous);
    assert_eq!(Endpoint::attendance_status().auth, Auth::Bearer);
    assert_eq!(extract_detail(&json!({"detail": ""})), GENERIC_REQUEST_ERROR);
}

/// Logged-in context whose next backend answers come from `fake`.
async fn logged_in(name: &str, fake: &Arc<FakeTransport>) -> (AppContext, String) {
    fake.reply(200, login_json("admin_rrhh"));
    let (mut store, path) = store(name);
    store
        .login(&client(fake, None), "12345678-5", "secret")
        .await
        .expect("login");

    let transport: Arc<dyn Transport> = fake.clone();
    (AppContext::new(Config::default(), transport, store), path)
}

#[tokio::test]
async fn rejected_token_ends_the_persisted_session() {
    let fake = FakeTransport::new();
    let (mut ctx, path) = logged_in("settle_401", &fake).await;
    fake.reply(401, json!({"detail": "Token inválido o expirado"}));
    assert!(Path::new(&path).exists());

    let cli = Cli::try_parse_from(["kivo", "status"]).expect("args");
    let err = dispatch_and_settle(&cli, &mut ctx).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidSession));
    assert!(ctx.session.current().is_none());
    assert!(!Path::new(&path).exists());
    assert_eq!(fake.requests()[1].bearer.as_deref(), Some("acc-123"));
}

#[tokio::test]
async fn other_failures_keep_the_session() {
    let fake = FakeTransport::new();
    let (mut ctx, path) = logged_in("settle_403", &fake).await;
    fake.reply(403, json!({"detail": "Empresa no autorizada"}));

    let cli = Cli::try_parse_from(["kivo", "companies"]).expect("args");
    let err = dispatch_and_settle(&cli, &mut ctx).await.unwrap_err();

    assert_eq!(err.to_string(), "Empresa no autorizada");
    assert!(ctx.session.current().is_some());
    assert!(Path::new(&path).exists());
}
