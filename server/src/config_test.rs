use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind, DEFAULT_BIND);
    assert!(cfg.assets_dir.ends_with("public/assets"));
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_applied() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("OUTLIERS_BIND", "127.0.0.1"),
        ("ASSETS_DIR", "/srv/outliers/assets"),
    ]))
    .unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/outliers/assets"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("ASSETS_DIR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.assets_dir.ends_with("public/assets"));
}

#[test]
fn port_is_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(cfg.port, 4000);
}

#[test]
fn invalid_port_is_an_error() {
    for value in ["http", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", value)])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid { var: "PORT", value: value.to_owned() });
    }
}

#[test]
fn invalid_bind_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("OUTLIERS_BIND", "localhost")])).unwrap_err();
    assert!(err.to_string().contains("OUTLIERS_BIND"));
}

