//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, DictionaryConfig, LogConfig, Validate};
use crate::data_structures::trie::{CandidateScope, TrieConfig};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use test_case::test_case;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = DictionaryConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trie.max_edit_distance, 2);
    assert_eq!(config.log.level, "info");
}

#[test_case(0, false ; "zero distance rejected")]
#[test_case(1, true ; "lower bound")]
#[test_case(8, true ; "upper bound")]
#[test_case(9, false ; "above upper bound")]
fn test_max_edit_distance_validation(distance: usize, valid: bool) {
    let config = TrieConfig::new().with_max_edit_distance(distance);
    assert_eq!(config.validate().is_ok(), valid);
}

#[test]
fn test_out_of_range_error_names_key() {
    let config = TrieConfig::new().with_max_edit_distance(0);
    match config.validate() {
        Err(ConfigError::ValueOutOfRange { key, .. }) => {
            assert_eq!(key, "trie.max_edit_distance");
        }
        other => panic!("unexpected validation result: {other:?}"),
    }
}

#[test]
fn test_invalid_log_level() {
    let config = LogConfig {
        level: "verbose".to_string(),
        ..LogConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "dictionary.toml",
            r#"
            [trie]
            max_edit_distance = 1
            candidate_scope = "all_words"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.trie.max_edit_distance, 1);
    assert_eq!(config.trie.candidate_scope, CandidateScope::AllWords);
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert!(!config.log.json);
    assert!(config.log.source_location);
}

#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("dictionary.json", r#"{ "trie": { "max_edit_distance": 3 } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();
    assert_eq!(config.trie.max_edit_distance, 3);
    assert_eq!(config.trie.candidate_scope, CandidateScope::FirstLetter);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("dictionary.toml", "[trie]\nmax_edit_distance = 1\n")
        .unwrap();

    fixture.set_env("TEST_ENV__TRIE__MAX_EDIT_DISTANCE", "4");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "warn");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV")
        .load()
        .unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.trie.max_edit_distance, 4);
    assert_eq!(config.log.level, "warn");
}

#[test]
fn test_env_var_invalid_value_fails_validation() {
    let mut fixture = TestFixture::new().unwrap();
    fixture.set_env("TEST_ENV_INVALID__TRIE__MAX_EDIT_DISTANCE", "42");

    let result = ConfigLoader::new(None::<&str>, "TEST_ENV_INVALID").load();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange { .. })));
}

#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let missing = fixture.temp_dir.path().join("absent.toml");

    let result = ConfigLoader::new(Some(&missing), "TEST_MISSING").load();
    assert_eq!(result, Err(ConfigError::FileNotFound(missing)));
}

#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("dictionary.ini", "[trie]").unwrap();

    let result = ConfigLoader::new(Some(&path), "TEST_EXT").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("invalid.toml", "[trie\nmax_edit_distance = two\"")
        .unwrap();

    let result = ConfigLoader::new(Some(&path), "TEST_INVALID").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test that the default configuration survives a TOML round trip through the loader.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let rendered = DictionaryConfig::default().to_toml_string().unwrap();
    assert!(rendered.contains("[trie]"));
    assert!(rendered.contains("[log]"));

    let path = fixture.create_file("generated.toml", rendered).unwrap();
    let config = ConfigLoader::new(Some(&path), "TEST_GENERATED")
        .load()
        .unwrap();
    assert_eq!(config, DictionaryConfig::default());
}

#[test]
fn test_build_trie_uses_config() {
    let mut config = DictionaryConfig::default();
    config.trie.candidate_scope = CandidateScope::AllWords;

    let trie = crate::build_trie(&config);
    assert_eq!(trie.config().candidate_scope, CandidateScope::AllWords);
    assert!(trie.is_empty());
}
