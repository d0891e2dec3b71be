use super::*;
use secrecy::ExposeSecret;
use std::collections::HashMap;

fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_only_token_is_set() {
    let config = load(&[("API_TOKEN", "s3cret")]).unwrap();

    assert_eq!(config.bind_addr(), "0.0.0.0:5001".parse().unwrap());
    assert_eq!(config.api_token.expose_secret(), "s3cret");
    assert!(config.device_update_require_auth);
    assert_eq!(config.request_timeout, Duration::from_secs(10));
}

#[test]
fn missing_token_is_an_error() {
    let err = load(&[("PORT", "8080")]).unwrap_err();
    assert!(err.to_string().contains("API_TOKEN"));
}

#[test]
fn empty_token_is_an_error() {
    assert!(load(&[("API_TOKEN", "")]).is_err());
}

#[test]
fn overrides_are_read() {
    let config = load(&[
        ("API_TOKEN", "s3cret"),
        ("HOST", "127.0.0.1"),
        ("PORT", " 9000 "),
        ("DEVICE_UPDATE_REQUIRE_AUTH", "false"),
        ("REQUEST_TIMEOUT_SECS", "3"),
    ])
    .unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:9000".parse().unwrap());
    assert!(!config.device_update_require_auth);
    assert_eq!(config.request_timeout, Duration::from_secs(3));
}

#[test]
fn invalid_port_is_an_error() {
    let err = load(&[("API_TOKEN", "s3cret"), ("PORT", "http")]).unwrap_err();
    assert!(err.to_string().contains("PORT"));

    assert!(load(&[("API_TOKEN", "s3cret"), ("PORT", "70000")]).is_err());
}

#[test]
fn invalid_host_is_an_error() {
    assert!(load(&[("API_TOKEN", "s3cret"), ("HOST", "not-an-ip")]).is_err());
}

#[test]
fn bool_parsing_accepts_common_spellings() {
    for raw in ["1", "true", "TRUE", "yes", "on"] {
        assert!(parse_bool(raw).unwrap(), "{raw}");
    }
    for raw in ["0", "false", "False", "no", "off"] {
        assert!(!parse_bool(raw).unwrap(), "{raw}");
    }
    assert!(parse_bool("maybe").is_err());
}

#[test]
fn debug_output_redacts_token() {
    let config = load(&[("API_TOKEN", "do-not-print")]).unwrap();
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("do-not-print"));
}
