use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::{
    env_var_names, ConfigError, CrawlerConfig, DEFAULT_DOWNLOAD_URL,
    DEFAULT_MAX_CONCURRENT_DOWNLOADS, DEFAULT_PAGE_SIZE,
};
use crate::tests::TEST_COOKIE;

fn lookup_from(
    pairs: &[(&'static str, &str)],
) -> impl Fn(&'static str) -> Option<String> {
    let map: HashMap<&'static str, String> =
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_only_need_cookie() {
    let config =
        CrawlerConfig::from_lookup(lookup_from(&[(env_var_names::COOKIE, TEST_COOKIE)]))
            .unwrap();

    assert_eq!(config.cookie, TEST_COOKIE);
    assert_eq!(config.download_root, PathBuf::from("download"));
    assert_eq!(config.max_concurrent_downloads, DEFAULT_MAX_CONCURRENT_DOWNLOADS);
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.download_url.as_str(), DEFAULT_DOWNLOAD_URL);
}

#[test]
fn missing_or_placeholder_cookie_is_rejected() {
    let err = CrawlerConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingCookie(_)));

    let err = CrawlerConfig::from_lookup(lookup_from(&[(
        env_var_names::COOKIE,
        "填写你的Cookie",
    )]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::MissingCookie(_)));

    let err =
        CrawlerConfig::from_lookup(lookup_from(&[(env_var_names::COOKIE, "   ")]))
            .unwrap_err();
    assert!(matches!(err, ConfigError::MissingCookie(_)));
}

#[test]
fn overrides_are_applied() {
    let config = CrawlerConfig::from_lookup(lookup_from(&[
        (env_var_names::COOKIE, TEST_COOKIE),
        (env_var_names::DOWNLOAD_ROOT, "/tmp/mirror"),
        (env_var_names::MAX_CONCURRENT, " 5 "),
        (env_var_names::PAGE_SIZE, "200"),
        (env_var_names::LIST_URL, "http://127.0.0.1:9/list.do"),
    ]))
    .unwrap();

    assert_eq!(config.download_root, PathBuf::from("/tmp/mirror"));
    assert_eq!(config.max_concurrent_downloads, 5);
    assert_eq!(config.page_size, 200);
    assert_eq!(config.list_url.as_str(), "http://127.0.0.1:9/list.do");
}

#[test]
fn zero_concurrency_is_clamped_to_one() {
    let config = CrawlerConfig::from_lookup(lookup_from(&[
        (env_var_names::COOKIE, TEST_COOKIE),
        (env_var_names::MAX_CONCURRENT, "0"),
    ]))
    .unwrap();

    assert_eq!(config.max_concurrent_downloads, 1);
}

#[test]
fn invalid_values_are_reported() {
    let err = CrawlerConfig::from_lookup(lookup_from(&[
        (env_var_names::COOKIE, TEST_COOKIE),
        (env_var_names::MAX_CONCURRENT, "three"),
    ]))
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue { key: env_var_names::MAX_CONCURRENT, .. }
    ));

    let err = CrawlerConfig::from_lookup(lookup_from(&[
        (env_var_names::COOKIE, TEST_COOKIE),
        (env_var_names::TOKEN_URL, "not a url"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { .. }));
}

#[test]
fn debug_hides_cookie() {
    let config = CrawlerConfig::new(TEST_COOKIE).unwrap();
    let printed = format!("{config:?}");
    assert!(!printed.contains("csrf-123"));
    assert!(printed.contains("<hidden>"));
}
