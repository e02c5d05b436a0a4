use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.assets_dir.ends_with("assets"));
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("ASSETS_DIR", "/srv/urban-ritual/assets"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/urban-ritual/assets"));
}

#[test]
fn accepts_ipv6_host() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[("HOST", "::1")])).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "[::1]:3000");
}

#[test]
fn rejects_bad_port() {
    let err = SiteConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

#[test]
fn rejects_out_of_range_port() {
    let err = SiteConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn rejects_bad_host() {
    let err = SiteConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { .. }));
}
