use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ApiConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_API_URL);
    assert_eq!(cfg.plant_id, 1);
    assert_eq!(cfg.list_limit, 20);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ApiConfig::from_lookup(lookup_from(&[
        ("PTAS_API_URL", "https://ptas.example.test/api/v1/"),
        ("PTAS_PLANT_ID", "3"),
        ("PTAS_LIST_LIMIT", "50"),
        ("PTAS_REQUEST_TIMEOUT_SECS", "5"),
        ("PTAS_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://ptas.example.test/api/v1");
    assert_eq!(cfg.plant_id, 3);
    assert_eq!(cfg.list_limit, 50);
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.connect_timeout_secs, 2);
}

#[test]
fn from_lookup_invalid_numbers_fall_back() {
    let cfg = ApiConfig::from_lookup(lookup_from(&[("PTAS_PLANT_ID", "north"), ("PTAS_LIST_LIMIT", "-4")])).unwrap();
    assert_eq!(cfg.plant_id, DEFAULT_PLANT_ID);
    assert_eq!(cfg.list_limit, DEFAULT_LIST_LIMIT);
}

#[test]
fn from_lookup_empty_base_url_errors() {
    let err = ApiConfig::from_lookup(lookup_from(&[("PTAS_API_URL", " / ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyBaseUrl);
}
