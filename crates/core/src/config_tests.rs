use super::*;
use std::io::Write as _;

#[test]
fn defaults_match_the_reference_demo() {
    let config = SimConfig::default();

    assert_eq!(config.vote_capacity, 15);
    assert_eq!(config.vote_threshold, 12);
    assert_eq!(config.vote_tick_period, Duration::from_millis(300));
    assert_eq!(config.vote_advance_delay, Duration::from_secs(1));
    assert_eq!(config.plan_reveal_delay, Duration::from_secs(3));
    assert_eq!(config.progress_tick_period, Duration::from_millis(200));
    assert_eq!(config.countdown_tick_period, Duration::from_secs(1));
    assert_eq!(config.countdown_initial_secs, 86_400);
    assert_eq!(config.decel_threshold, 30.0);
    assert_eq!(config.early_increment, (0.2, 0.7));
    assert_eq!(config.late_increment, (0.1, 0.3));
    assert!(config.validate().is_ok());
}

#[test]
fn load_overrides_only_named_fields() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
vote_threshold = 6
vote_tick_period = "50ms"
countdown_initial_secs = 3600
"#
    )
    .expect("write config");

    let config = SimConfig::load(file.path()).expect("load config");

    assert_eq!(config.vote_threshold, 6);
    assert_eq!(config.vote_tick_period, Duration::from_millis(50));
    assert_eq!(config.countdown_initial_secs, 3600);
    // Unnamed fields keep their defaults
    assert_eq!(config.vote_capacity, 15);
    assert_eq!(config.progress_tick_period, Duration::from_millis(200));
}

#[test]
fn load_rejects_unknown_fields() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "vote_treshold = 6").expect("write config");

    assert!(matches!(
        SimConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn load_rejects_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");

    assert!(matches!(
        SimConfig::load(&missing),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn validate_rejects_threshold_beyond_capacity() {
    let config = SimConfig {
        vote_threshold: 20,
        ..SimConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn validate_rejects_zero_vote_increment() {
    let config = SimConfig {
        vote_increment_min: 0,
        ..SimConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn validate_rejects_inverted_increment_range() {
    let config = SimConfig {
        early_increment: (0.7, 0.2),
        ..SimConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn validate_rejects_zero_periods() {
    let config = SimConfig {
        progress_tick_period: Duration::ZERO,
        ..SimConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn accelerated_compresses_periods_but_not_counts() {
    let config = SimConfig::default().accelerated(10);

    assert_eq!(config.vote_tick_period, Duration::from_millis(30));
    assert_eq!(config.plan_reveal_delay, Duration::from_millis(300));
    assert_eq!(config.countdown_tick_period, Duration::from_millis(100));
    // Thresholds and counters are untouched
    assert_eq!(config.vote_threshold, 12);
    assert_eq!(config.countdown_initial_secs, 86_400);
}

#[test]
fn accelerated_never_reaches_zero() {
    let config = SimConfig::default().accelerated(1_000_000);
    assert_eq!(config.progress_tick_period, Duration::from_millis(1));
}

#[test]
fn accelerated_by_one_is_identity() {
    let config = SimConfig::default();
    assert_eq!(config.accelerated(1), config);
}
