use super::*;
use crate::error::StorageError;
use crate::storage::MemoryStore;
use crate::store::{ACCESS_TOKEN_KEY, USER_KEY};
use crate::test_support::{BASE_URL, FakeTransport, bundle, detail_response, json_response, user};
use crate::types::Role;

fn session(transport: &FakeTransport, storage: &MemoryStore) -> Session<FakeTransport, MemoryStore> {
    Session::new(transport.clone(), BASE_URL, storage.clone())
}

fn bundle_response(token: &str, u: User) -> crate::transport::HttpResponse {
    json_response(200, &serde_json::to_value(bundle(token, u)).unwrap())
}

fn seed(storage: &MemoryStore, token: &str, u: &User) {
    storage.set(ACCESS_TOKEN_KEY, token).unwrap();
    storage.set(USER_KEY, &serde_json::to_string(u).unwrap()).unwrap();
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_session_starts_initializing() {
    let s = session(&FakeTransport::new(), &MemoryStore::new());
    assert_eq!(s.state(), SessionState::Initializing);
    assert!(s.is_loading());
    assert!(!s.is_authenticated());
}

#[test]
fn initialize_with_empty_storage_is_unauthenticated() {
    let transport = FakeTransport::new();
    let s = session(&transport, &MemoryStore::new());
    s.initialize();
    assert_eq!(s.state(), SessionState::Unauthenticated);
    assert!(transport.requests().is_empty());
}

#[test]
fn initialize_with_token_and_user_restores_session() {
    let storage = MemoryStore::new();
    let u = user("admin", Role::Administrator);
    seed(&storage, "tok-1", &u);
    let s = session(&FakeTransport::new(), &storage);
    s.initialize();
    assert_eq!(s.state(), SessionState::Authenticated(u));
}

#[test]
fn initialize_with_user_but_no_token_is_unauthenticated() {
    let storage = MemoryStore::new();
    storage.set(USER_KEY, &serde_json::to_string(&user("admin", Role::Administrator)).unwrap()).unwrap();
    let s = session(&FakeTransport::new(), &storage);
    s.initialize();
    assert_eq!(s.state(), SessionState::Unauthenticated);
}

#[test]
fn initialize_with_token_but_no_user_is_unauthenticated() {
    let storage = MemoryStore::new();
    storage.set(ACCESS_TOKEN_KEY, "tok-1").unwrap();
    let s = session(&FakeTransport::new(), &storage);
    s.initialize();
    assert_eq!(s.state(), SessionState::Unauthenticated);
    // The store alone still reports presence-based authentication.
    assert!(s.store().is_authenticated());
}

#[test]
fn initialize_with_corrupt_user_falls_back_to_unauthenticated() {
    let storage = MemoryStore::new();
    storage.set(ACCESS_TOKEN_KEY, "tok-1").unwrap();
    storage.set(USER_KEY, "{\"id\":").unwrap();
    let s = session(&FakeTransport::new(), &storage);
    s.initialize();
    assert_eq!(s.state(), SessionState::Unauthenticated);
    assert_eq!(s.store().user(), None);
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_success_persists_then_authenticates() {
    let transport = FakeTransport::new();
    let storage = MemoryStore::new();
    transport.respond(bundle_response("tok-admin", user("admin", Role::Administrator)));
    let s = session(&transport, &storage);
    s.initialize();

    let logged_in = s.login("admin", "admin123").await.unwrap();

    assert_eq!(logged_in.username, "admin");
    assert_eq!(s.user().map(|u| u.username), Some("admin".to_owned()));
    assert_eq!(s.store().token().as_deref(), Some("tok-admin"));
    assert_eq!(s.store().user(), Some(logged_in));
}

#[tokio::test]
async fn login_from_initializing_is_allowed() {
    let transport = FakeTransport::new();
    transport.respond(bundle_response("tok-1", user("admin", Role::Administrator)));
    let s = session(&transport, &MemoryStore::new());

    s.login("admin", "admin123").await.unwrap();

    assert!(s.is_authenticated());
}

#[tokio::test]
async fn login_rejected_leaves_storage_and_state_unchanged() {
    let transport = FakeTransport::new();
    let storage = MemoryStore::new();
    transport.respond(detail_response(401, "Usuario o contraseña incorrectos"));
    let s = session(&transport, &storage);
    s.initialize();

    let err = s.login("admin", "wrong").await.unwrap_err();

    assert!(matches!(err, ApiError::Authentication { .. }));
    assert_eq!(err.detail(), Some("Usuario o contraseña incorrectos"));
    assert_eq!(s.state(), SessionState::Unauthenticated);
    assert!(storage.is_empty());
}

#[tokio::test]
async fn login_network_failure_leaves_existing_session() {
    let transport = FakeTransport::new();
    let storage = MemoryStore::new();
    let existing = user("sup", Role::Supervisor);
    seed(&storage, "tok-old", &existing);
    transport.fail("connection reset");
    let s = session(&transport, &storage);
    s.initialize();

    let err = s.login("admin", "admin123").await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(s.state(), SessionState::Authenticated(existing.clone()));
    assert_eq!(s.store().token().as_deref(), Some("tok-old"));
    assert_eq!(s.store().user(), Some(existing));
}

// =============================================================
// logout
// =============================================================

#[tokio::test]
async fn operator_scenario_login_then_logout_empties_storage() {
    let transport = FakeTransport::new();
    let storage = MemoryStore::new();
    transport.respond(bundle_response("tok-1", user("op1", Role::Operator)));
    let s = session(&transport, &storage);

    s.initialize();
    assert_eq!(s.state(), SessionState::Unauthenticated);

    s.login("op1", "secret").await.unwrap();
    let state = s.state();
    assert_eq!(state.user().map(|u| u.role), Some(Role::Operator));

    s.logout();
    assert_eq!(s.state(), SessionState::Unauthenticated);
    assert_eq!(s.store().token(), None);
    assert_eq!(s.store().user(), None);
    assert!(storage.is_empty());
}

#[test]
fn logout_when_unauthenticated_still_succeeds() {
    let transport = FakeTransport::new();
    let s = session(&transport, &MemoryStore::new());
    s.logout();
    assert_eq!(s.state(), SessionState::Unauthenticated);
    assert!(transport.requests().is_empty());
}

// =============================================================
// refresh_profile / refresh_tokens
// =============================================================

#[tokio::test]
async fn refresh_profile_requires_active_session() {
    let transport = FakeTransport::new();
    let s = session(&transport, &MemoryStore::new());
    s.initialize();

    let err = s.refresh_profile().await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized { detail: None });
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn refresh_profile_replaces_user() {
    let transport = FakeTransport::new();
    let storage = MemoryStore::new();
    seed(&storage, "tok-1", &user("op1", Role::Operator));
    let mut promoted = user("op1", Role::Operator);
    promoted.role = Role::Supervisor;
    transport.respond(json_response(200, &serde_json::to_value(&promoted).unwrap()));
    let s = session(&transport, &storage);
    s.initialize();

    s.refresh_profile().await.unwrap();

    assert_eq!(s.user().map(|u| u.role), Some(Role::Supervisor));
    assert_eq!(s.store().user(), Some(promoted));
    assert_eq!(transport.last_request().bearer.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn refresh_profile_rejected_keeps_session() {
    let transport = FakeTransport::new();
    let storage = MemoryStore::new();
    let u = user("op1", Role::Operator);
    seed(&storage, "tok-expired", &u);
    transport.respond(detail_response(401, "Token expirado"));
    let s = session(&transport, &storage);
    s.initialize();

    let err = s.refresh_profile().await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(s.state(), SessionState::Authenticated(u));
    assert_eq!(s.store().token().as_deref(), Some("tok-expired"));
}

#[tokio::test]
async fn refresh_tokens_without_refresh_token_is_unauthorized() {
    let transport = FakeTransport::new();
    let storage = MemoryStore::new();
    seed(&storage, "tok-1", &user("op1", Role::Operator));
    let s = session(&transport, &storage);
    s.initialize();

    let err = s.refresh_tokens().await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized { detail: None });
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn refresh_tokens_rotates_access_token() {
    let transport = FakeTransport::new();
    let storage = MemoryStore::new();
    seed(&storage, "tok-1", &user("op1", Role::Operator));
    storage.set("refresh_token", "ref-1").unwrap();
    let mut renewed = bundle("tok-2", user("op1", Role::Operator));
    renewed.refresh_token = Some("ref-2".to_owned());
    transport.respond(json_response(200, &serde_json::to_value(&renewed).unwrap()));
    let s = session(&transport, &storage);
    s.initialize();

    s.refresh_tokens().await.unwrap();

    assert_eq!(s.store().token().as_deref(), Some("tok-2"));
    assert_eq!(s.store().refresh_token().as_deref(), Some("ref-2"));
    assert!(s.is_authenticated());
}

// =============================================================
// register
// =============================================================

#[tokio::test]
async fn register_does_not_change_session() {
    let transport = FakeTransport::new();
    let storage = MemoryStore::new();
    transport.respond(json_response(201, &serde_json::to_value(user("op9", Role::Operator)).unwrap()));
    let s = session(&transport, &storage);
    s.initialize();

    let new_user = NewUser {
        username: "op9".to_owned(),
        email: "op9@ptas.test".to_owned(),
        password: "pw".to_owned(),
        full_name: "op9 full".to_owned(),
        role: None,
    };
    let created = s.register(&new_user).await.unwrap();

    assert_eq!(created.username, "op9");
    assert_eq!(s.state(), SessionState::Unauthenticated);
    assert!(storage.is_empty());
}

// =============================================================
// persistence failure
// =============================================================

/// Store that rejects writes to the user entry.
#[derive(Clone, Default)]
struct UserWriteFails(MemoryStore);

impl KeyValueStore for UserWriteFails {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == USER_KEY {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.0.set(key, value)
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.0.remove_all(keys)
    }
}

#[tokio::test]
async fn login_persist_failure_clears_partial_session() {
    let transport = FakeTransport::new();
    let storage = UserWriteFails::default();
    transport.respond(bundle_response("tok-1", user("op1", Role::Operator)));
    let s = Session::new(transport.clone(), BASE_URL, storage.clone());
    s.initialize();

    let err = s.login("op1", "secret").await.unwrap_err();

    assert!(matches!(err, ApiError::Storage(StorageError::Write(_))));
    assert_eq!(s.state(), SessionState::Unauthenticated);
    assert!(storage.0.is_empty());
}
