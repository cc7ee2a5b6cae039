use super::*;
use ptas::storage::KeyValueStore;
use ptas::store::{ACCESS_TOKEN_KEY, USER_KEY};
use ptas::types::User;

fn operator() -> User {
    User {
        id: 3,
        email: "op1@ptas.cl".into(),
        username: "op1".into(),
        full_name: "Operador Uno".into(),
        role: Role::Operator,
        plant_id: Some(1),
        is_active: true,
        created_at: "2024-01-01T00:00:00".into(),
    }
}

fn session_at(dir: &tempfile::TempDir) -> CliSession {
    let config = ApiConfig::default();
    let transport = ReqwestTransport::new(&config).unwrap();
    Session::new(transport, config.base_url, FileStore::new(dir.path().join("session.json")))
}

// =============================================================================
// CONFIG OVERRIDES
// =============================================================================

#[test]
fn resolve_config_keeps_env_values_without_flags() {
    let config = resolve_config(ApiConfig::default(), None, None).unwrap();
    assert_eq!(config, ApiConfig::default());
}

#[test]
fn resolve_config_applies_flags() {
    let config = resolve_config(ApiConfig::default(), Some(" http://plant.local/api/v1/ "), Some(4)).unwrap();
    assert_eq!(config.base_url, "http://plant.local/api/v1");
    assert_eq!(config.plant_id, 4);
}

#[test]
fn resolve_config_rejects_empty_base_url() {
    let err = resolve_config(ApiConfig::default(), Some("  "), None).unwrap_err();
    assert!(matches!(err, CliError::Config(ConfigError::EmptyBaseUrl)));
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn parses_resolve_with_notes() {
    let cli = Cli::try_parse_from(["ptas-cli", "--plant-id", "2", "resolve", "7", "--notes", "valvula cambiada"]).unwrap();
    assert_eq!(cli.plant_id, Some(2));
    match cli.command {
        Command::Resolve { alert_id, notes } => {
            assert_eq!(alert_id, 7);
            assert_eq!(notes.as_deref(), Some("valvula cambiada"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_register_role() {
    let cli = Cli::try_parse_from([
        "ptas-cli",
        "register",
        "--username",
        "sup",
        "--email",
        "sup@ptas.cl",
        "--full-name",
        "Supervisora",
        "--password",
        "secret",
        "--role",
        "supervisor",
    ])
    .unwrap();
    match cli.command {
        Command::Register { role, .. } => assert_eq!(role.map(Role::from), Some(Role::Supervisor)),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_alert_stats_subcommand_name() {
    let cli = Cli::try_parse_from(["ptas-cli", "alert-stats"]).unwrap();
    assert!(matches!(cli.command, Command::AlertStats));
}

#[test]
fn rejects_unknown_role() {
    let result = Cli::try_parse_from([
        "ptas-cli", "register", "--username", "x", "--email", "x@y", "--full-name", "X", "--role", "root",
    ]);
    assert!(result.is_err());
}

// =============================================================================
// SESSION GUARD
// =============================================================================

#[test]
fn require_session_rejects_empty_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_at(&dir);
    session.initialize();
    assert!(matches!(require_session(&session), Err(CliError::NotLoggedIn)));
}

#[test]
fn require_session_rejects_before_initialize() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_at(&dir);
    assert!(matches!(require_session(&session), Err(CliError::NotLoggedIn)));
}

#[test]
fn require_session_accepts_stored_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("session.json"));
    store.set(ACCESS_TOKEN_KEY, "abc").unwrap();
    store.set(USER_KEY, &serde_json::to_string(&operator()).unwrap()).unwrap();

    let session = session_at(&dir);
    session.initialize();
    assert!(require_session(&session).is_ok());
    assert_eq!(session.user(), Some(operator()));
}

#[tokio::test]
async fn login_without_password_fails_before_network() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_at(&dir);
    session.initialize();
    let command = Command::Login { username: "op1".into(), password: None };
    let err = run(&session, &ApiConfig::default(), command).await.unwrap_err();
    assert!(matches!(err, CliError::MissingPassword));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn protected_command_without_session_fails_before_network() {
    let dir = tempfile::tempdir().unwrap();
    let session = session_at(&dir);
    session.initialize();
    let err = run(&session, &ApiConfig::default(), Command::Dashboard).await.unwrap_err();
    assert!(matches!(err, CliError::NotLoggedIn));
}

#[tokio::test]
async fn logout_clears_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let store = FileStore::new(&path);
    store.set(ACCESS_TOKEN_KEY, "abc").unwrap();
    store.set(USER_KEY, &serde_json::to_string(&operator()).unwrap()).unwrap();

    let session = session_at(&dir);
    session.initialize();
    run(&session, &ApiConfig::default(), Command::Logout).await.unwrap();

    assert!(!session.is_authenticated());
    assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
    assert_eq!(store.get(USER_KEY).unwrap(), None);
}
