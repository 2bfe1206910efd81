use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("SEATPICK_BIND", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_treats_empty_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", ""), ("SEATPICK_BIND", "  ")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_lookup_accepts_ipv6_bind() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("SEATPICK_BIND", "::1")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:3000");
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::Config { var: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ServerError::Config { var: "PORT", .. }));
}

#[test]
fn from_lookup_rejects_invalid_bind() {
    let err = ServerConfig::from_lookup(lookup_from(&[("SEATPICK_BIND", "localhost")])).unwrap_err();
    assert!(matches!(err, ServerError::Config { var: "SEATPICK_BIND", .. }));
}
