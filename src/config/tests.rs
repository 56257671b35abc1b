use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const LOUPE_ENV_VARS: &[&str] = &[
    "LOUPE_LIBRARY_PATH",
    "LOUPE_COMPARISON_LOG",
    "LOUPE_WEIGHT_BRAND",
    "LOUPE_WEIGHT_MODEL",
    "LOUPE_WEIGHT_REFERENCE",
    "LOUPE_WEIGHT_PHYSICAL",
    "LOUPE_TIER_EXCELLENT",
    "LOUPE_TIER_GOOD",
    "LOUPE_TIER_POSSIBLE",
    "LOUPE_TIER_POOR",
    "LOUPE_RETRIEVAL_BRAND_FLOOR",
    "LOUPE_MIN_BRAND_SCORE",
    "LOUPE_MIN_MODEL_SCORE",
    "LOUPE_MAX_RESULTS",
    "LOUPE_CANDIDATE_LIMIT",
];

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_loupe_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for key in LOUPE_ENV_VARS {
        unsafe { env::remove_var(key) };
    }
}

#[test]
fn test_default_matching_config() {
    let config = MatchingConfig::default();

    assert_eq!(config.weights.brand, 0.40);
    assert_eq!(config.weights.model, 0.35);
    assert_eq!(config.weights.reference, 0.15);
    assert_eq!(config.weights.physical, 0.10);
    assert_eq!(config.thresholds.excellent, 85.0);
    assert_eq!(config.thresholds.good, 70.0);
    assert_eq!(config.thresholds.possible, 55.0);
    assert_eq!(config.floors.retrieval_brand, 0.75);
    assert_eq!(config.floors.brand, 65.0);
    assert_eq!(config.floors.model, 50.0);
    assert_eq!(config.max_results, 5);
    assert_eq!(config.candidate_limit, 50);
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_config_paths() {
    let config = Config::default();
    assert_eq!(config.library_path, PathBuf::from("./library.json"));
    assert_eq!(
        config.comparison_log_path,
        PathBuf::from("./.data/comparisons.jsonl")
    );
}

#[test]
fn test_weights_must_sum_to_one() {
    let config = MatchingConfig::default().with_weights(MatchWeights {
        brand: 0.5,
        model: 0.5,
        reference: 0.5,
        physical: 0.0,
    });

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWeights { .. }));
    assert!(err.to_string().contains("sum to 1.0"));
}

#[test]
fn test_negative_weight_rejected() {
    let weights = MatchWeights {
        brand: 1.2,
        model: -0.2,
        reference: 0.0,
        physical: 0.0,
    };
    assert!(matches!(
        weights.validate(),
        Err(ConfigError::InvalidWeights { .. })
    ));
}

#[test]
fn test_thresholds_must_be_ordered() {
    let thresholds = ConfidenceThresholds {
        excellent: 70.0,
        good: 85.0,
        possible: 55.0,
        poor: 0.0,
    };
    assert!(matches!(
        thresholds.validate(),
        Err(ConfigError::InvalidThresholds { .. })
    ));

    let out_of_range = ConfidenceThresholds {
        excellent: 120.0,
        ..Default::default()
    };
    assert!(out_of_range.validate().is_err());
}

#[test]
fn test_floors_respect_their_scale() {
    let floors = SimilarityFloors {
        retrieval_brand: 75.0,
        ..Default::default()
    };
    let err = floors.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidFloor {
            name: "retrieval_brand",
            ..
        }
    ));
}

#[test]
fn test_zero_limits_rejected() {
    let err = MatchingConfig::default()
        .with_max_results(0)
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ZeroLimit { name: "max_results" }));

    let err = MatchingConfig::default()
        .with_candidate_limit(0)
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ZeroLimit {
            name: "candidate_limit"
        }
    ));
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_loupe_env();

    let config = MatchingConfig::from_env().expect("should parse with defaults");
    assert_eq!(config, MatchingConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_loupe_env();

    let config = with_env_vars(
        &[
            ("LOUPE_WEIGHT_BRAND", "0.5"),
            ("LOUPE_WEIGHT_MODEL", "0.25"),
            ("LOUPE_MIN_MODEL_SCORE", "45"),
            ("LOUPE_MAX_RESULTS", " 10 "),
        ],
        MatchingConfig::from_env,
    )
    .expect("overrides should parse");

    assert_eq!(config.weights.brand, 0.5);
    assert_eq!(config.weights.model, 0.25);
    assert_eq!(config.floors.model, 45.0);
    assert_eq!(config.max_results, 10);
}

#[test]
#[serial]
fn test_from_env_rejects_unparseable_number() {
    clear_loupe_env();

    let result = with_env_vars(&[("LOUPE_TIER_GOOD", "seventy")], MatchingConfig::from_env);

    match result {
        Err(ConfigError::InvalidNumber { name, value, .. }) => {
            assert_eq!(name, "LOUPE_TIER_GOOD");
            assert_eq!(value, "seventy");
        }
        other => panic!("expected InvalidNumber, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_weight_sum() {
    clear_loupe_env();

    let result = with_env_vars(&[("LOUPE_WEIGHT_BRAND", "0.9")], MatchingConfig::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidWeights { .. })));
}

#[test]
#[serial]
fn test_config_from_env_paths() {
    clear_loupe_env();

    let config = with_env_vars(
        &[
            ("LOUPE_LIBRARY_PATH", "/srv/loupe/library.json"),
            ("LOUPE_COMPARISON_LOG", "   "),
        ],
        Config::from_env,
    )
    .expect("should parse");

    assert_eq!(config.library_path, PathBuf::from("/srv/loupe/library.json"));
    assert_eq!(
        config.comparison_log_path,
        PathBuf::from(DEFAULT_COMPARISON_LOG)
    );
}

#[test]
fn test_validate_missing_library_path() {
    let config = Config {
        library_path: PathBuf::from("/nonexistent/loupe/library.json"),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_library_path_is_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        library_path: dir.path().to_path_buf(),
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::NotAFile { .. })));
}

#[test]
fn test_validate_accepts_existing_library_file() {
    let dir = tempfile::tempdir().unwrap();
    let library = dir.path().join("library.json");
    std::fs::write(&library, "[]").unwrap();

    let config = Config {
        library_path: library,
        comparison_log_path: dir.path().join("logs").join("comparisons.jsonl"),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}
