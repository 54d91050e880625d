use std::time::{SystemTime, UNIX_EPOCH};

use sensei_core::search::ScoreWeights;

#[test]
fn accepts_default_config() {
    let cfg = sensei_core::config::Config::default();

    assert_eq!(cfg.max_results, 8);
    assert_eq!(cfg.weights, ScoreWeights::default());
    assert!(cfg.config_path.to_string_lossy().contains("sensei"));
    assert!(sensei_core::config::validate(&cfg).is_ok());
}

#[test]
fn rejects_max_results_out_of_range() {
    let too_small = sensei_core::config::Config {
        max_results: 0,
        ..Default::default()
    };
    assert!(sensei_core::config::validate(&too_small).is_err());

    let too_large = sensei_core::config::Config {
        max_results: 200,
        ..Default::default()
    };
    assert!(sensei_core::config::validate(&too_large).is_err());
}

#[test]
fn rejects_non_monotonic_weights() {
    let cfg = sensei_core::config::Config {
        weights: ScoreWeights {
            title: 10,
            category: 50,
            description: 25,
            word: 10,
        },
        ..Default::default()
    };
    assert!(sensei_core::config::validate(&cfg).is_err());
}

#[test]
fn save_then_load_roundtrips() {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir()
        .join(format!("sensei-config-{unique}"))
        .join("config.toml");

    let mut cfg = sensei_core::config::Config::default();
    cfg.config_path = path.clone();
    cfg.max_results = 12;

    sensei_core::config::save(&cfg).unwrap();
    let loaded = sensei_core::config::load(Some(path.clone())).unwrap();

    assert_eq!(loaded.max_results, 12);
    assert_eq!(loaded.weights, cfg.weights);
    assert_eq!(loaded.config_path, path);

    std::fs::remove_file(path).unwrap();
}

#[test]
fn load_without_file_yields_defaults_at_that_path() {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir()
        .join(format!("sensei-config-missing-{unique}"))
        .join("config.toml");

    let loaded = sensei_core::config::load(Some(path.clone())).unwrap();

    assert_eq!(loaded.max_results, 8);
    assert_eq!(loaded.config_path, path);
    assert!(!path.exists());
}
