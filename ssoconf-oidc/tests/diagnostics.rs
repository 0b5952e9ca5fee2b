mod common;

use common::{capture_logs, enabled_options};
use ssoconf_oidc::{OidcOptions, SharedOidcOptions};

#[test]
fn malformed_issuer_is_logged_not_raised() {
    let options = OidcOptions {
        uri: "not a valid uri???::".into(),
        ..Default::default()
    };

    let (uri, logs) = capture_logs(|| options.settings().issuer_uri());

    assert_eq!(uri.to_string(), "");
    assert!(logs.contains("ERROR"), "{logs}");
    assert!(logs.contains("oidc: failed to parse issuer URI"), "{logs}");
    assert!(logs.contains("error="), "{logs}");
}

#[test]
fn empty_issuer_is_not_logged() {
    let options = OidcOptions::default();
    let (uri, logs) = capture_logs(|| options.settings().issuer_uri());

    assert!(uri.is_empty());
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn valid_issuer_is_not_logged() {
    let options = enabled_options();
    let (uri, logs) = capture_logs(|| options.settings().issuer_uri());

    assert_eq!(uri.to_string(), "https://idp.example.com");
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn report_logs_malformed_issuer() {
    let options = OidcOptions {
        uri: "https://".into(),
        ..Default::default()
    };
    let (report, logs) = capture_logs(|| options.settings().report());

    assert_eq!(report.get("oidc-uri"), Some(""));
    assert!(logs.contains("failed to parse issuer URI"), "{logs}");
}

#[test]
fn replace_logs_enabled_state_without_secret() {
    let shared = SharedOidcOptions::default();
    let ((), logs) = capture_logs(|| shared.replace(enabled_options()));

    assert!(logs.contains("oidc: options replaced"), "{logs}");
    assert!(logs.contains("enabled=true"), "{logs}");
    assert!(!logs.contains("xyz123"), "{logs}");
}
