use std::time::Duration;

use rstest::rstest;

use super::{
    ClientConfig, DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT, TcpTransport,
    Transport, UnixTransport,
};

fn unix_config() -> ClientConfig {
    ClientConfig::new(Transport::Unix(UnixTransport {
        path: "/tmp/logflux-agent.sock".into(),
    }))
}

#[rstest]
fn new_applies_defaults() {
    let config = unix_config();
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.retry_count, DEFAULT_RETRY_COUNT);
    assert_eq!(config.retry_delay, DEFAULT_RETRY_DELAY);
    assert!(config.shared_secret.is_none());
}

#[rstest]
fn with_timeout_overrides_default() {
    let config = unix_config().with_timeout(Duration::from_secs(3));
    assert_eq!(config.timeout, Duration::from_secs(3));
}

#[rstest]
fn with_shared_secret_stores_token() {
    let config = ClientConfig::new(Transport::Tcp(TcpTransport {
        host: "127.0.0.1".to_owned(),
        port: 8080,
    }))
    .with_shared_secret("token");
    assert_eq!(config.shared_secret.as_deref(), Some("token"));
}

#[rstest]
fn with_retry_overrides_both_settings() {
    let config = unix_config().with_retry(5, Duration::from_millis(250));
    assert_eq!(config.retry_count, 5);
    assert_eq!(config.retry_delay, Duration::from_millis(250));
}
