// Unit tests for config loading, env overrides, and validation

use crate::config::{
    ImagegenConfig, GPU_ENDPOINT_ENV, LISTEN_ADDR_ENV, STATIC_DIR_ENV,
};
use crate::error::config::ConfigError;

use serial_test::serial;
use tempfile::tempdir;

/// **VALUE**: Verifies a missing config file falls back to working defaults.
///
/// **WHY THIS MATTERS**: The server must boot on a fresh checkout with no
/// config file at all; defaults are the documented deployment story for
/// local development.
#[test]
fn given_empty_config_dir_when_loading_then_returns_defaults() {
    // GIVEN: A directory with no config file
    let dir = tempdir().unwrap();

    // WHEN: Loading
    let config = ImagegenConfig::load(dir.path()).unwrap();

    // THEN: Defaults are in place and self-consistent
    assert_eq!(config.server.listen_addr, "0.0.0.0:8000");
    assert_eq!(config.server.static_dir, "public");
    assert_eq!(config.gpu.endpoint, "http://127.0.0.1:8001/generate");
    assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
    config.validate().unwrap();
}

#[test]
fn given_partial_toml_when_loading_then_missing_sections_use_defaults() {
    // GIVEN: A config file that only overrides the GPU endpoint
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("imagegen.toml"),
        "[gpu]\nendpoint = \"http://10.0.0.5:8001/generate\"\n",
    )
    .unwrap();

    // WHEN: Loading
    let config = ImagegenConfig::load(dir.path()).unwrap();

    // THEN: The override applies, everything else defaults
    assert_eq!(config.gpu.endpoint, "http://10.0.0.5:8001/generate");
    assert_eq!(config.server.listen_addr, "0.0.0.0:8000");
}

#[test]
fn given_config_in_config_subdir_when_loading_then_fallback_path_is_used() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("config")).unwrap();
    std::fs::write(
        dir.path().join("config").join("imagegen.toml"),
        "[server]\nlisten_addr = \"127.0.0.1:9000\"\n",
    )
    .unwrap();

    let config = ImagegenConfig::load(dir.path()).unwrap();

    assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
}

/// **VALUE**: Verifies a present-but-broken file is an error, not a silent
/// fallback to defaults.
///
/// **BUG THIS CATCHES**: Would catch load() swallowing parse errors - an
/// operator with a typo in their config must hear about it rather than
/// unknowingly run on defaults.
#[test]
fn given_malformed_toml_when_loading_then_returns_parse_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("imagegen.toml"), "this is not toml = [").unwrap();

    let result = ImagegenConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_unparseable_listen_addr_when_validating_then_returns_validation_error() {
    let mut config = ImagegenConfig::default();
    config.server.listen_addr = "not-an-address".to_string();

    let result = config.validate();

    match result.unwrap_err() {
        ConfigError::ValidationError { reason, .. } => {
            assert!(reason.contains("Invalid listen address"));
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

#[test]
fn given_non_http_gpu_endpoint_when_validating_then_returns_validation_error() {
    let mut config = ImagegenConfig::default();
    config.gpu.endpoint = "ftp://gpu-box/generate".to_string();

    let result = config.validate();

    match result.unwrap_err() {
        ConfigError::ValidationError { reason, .. } => {
            assert!(reason.contains("Invalid GPU endpoint format"));
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

#[test]
fn given_non_http_cors_origin_when_validating_then_returns_validation_error() {
    let mut config = ImagegenConfig::default();
    config.cors.allowed_origins = vec!["localhost:5173".to_string()];

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

/// **VALUE**: Verifies env overrides take precedence over loaded values
/// and that empty values are ignored.
///
/// Serialized because it mutates process-wide environment variables.
#[test]
#[serial]
fn given_env_overrides_when_applied_then_replace_loaded_values() {
    // GIVEN: Defaults plus env overrides (one of them empty)
    let mut config = ImagegenConfig::default();
    unsafe {
        std::env::set_var(LISTEN_ADDR_ENV, "127.0.0.1:9000");
        std::env::set_var(GPU_ENDPOINT_ENV, "http://10.0.0.5:8001/generate");
        std::env::set_var(STATIC_DIR_ENV, "");
    }

    // WHEN: Applying overrides
    config.apply_env_overrides();

    // THEN: Set vars override, the empty one is ignored
    assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(config.gpu.endpoint, "http://10.0.0.5:8001/generate");
    assert_eq!(config.server.static_dir, "public");
    config.validate().unwrap();

    // Cleanup
    unsafe {
        std::env::remove_var(LISTEN_ADDR_ENV);
        std::env::remove_var(GPU_ENDPOINT_ENV);
        std::env::remove_var(STATIC_DIR_ENV);
    }
}

/// Environment untouched: overrides must be a no-op.
#[test]
#[serial]
fn given_no_env_vars_when_applying_overrides_then_config_is_unchanged() {
    unsafe {
        std::env::remove_var(LISTEN_ADDR_ENV);
        std::env::remove_var(GPU_ENDPOINT_ENV);
        std::env::remove_var(STATIC_DIR_ENV);
    }

    let mut config = ImagegenConfig::default();
    config.apply_env_overrides();

    assert_eq!(config.server.listen_addr, "0.0.0.0:8000");
    assert_eq!(config.gpu.endpoint, "http://127.0.0.1:8001/generate");
    assert_eq!(config.server.static_dir, "public");
}
