use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = Config::default();
    assert_eq!(cfg.db_path, PathBuf::from(DEFAULT_DB_PATH));
    assert_eq!(cfg.username, "username");
    assert_eq!(cfg.password, "password");
    assert_eq!(cfg.log_filter, "warn");
}

#[test]
fn overrides_apply() {
    let cfg = Config::from_lookup(lookup_from(&[
        (DB_PATH_VAR, "/tmp/air.csv"),
        (USERNAME_VAR, "admin"),
        (PASSWORD_VAR, "s3cret"),
        (LOG_VAR, "store=debug"),
    ]));
    assert_eq!(cfg.db_path, PathBuf::from("/tmp/air.csv"));
    assert_eq!(cfg.username, "admin");
    assert_eq!(cfg.password, "s3cret");
    assert_eq!(cfg.log_filter, "store=debug");
}

#[test]
fn blank_values_fall_back() {
    let cfg = Config::from_lookup(lookup_from(&[(USERNAME_VAR, "  "), (LOG_VAR, "")]));
    assert_eq!(cfg.username, DEFAULT_USERNAME);
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn debug_hides_password() {
    let cfg = Config::from_lookup(lookup_from(&[(PASSWORD_VAR, "hunter2")]));
    assert!(!format!("{cfg:?}").contains("hunter2"));
}
