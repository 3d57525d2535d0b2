// Environment layering lives in its own test binary so no other test
// observes the variables it sets.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use arcanum_store::BackendConfig;

#[test]
fn test_environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("arcanum.toml");
    std::fs::write(&file_path, "busy_timeout_ms = 250\n").unwrap();

    std::env::set_var("ARCANUM_BUSY_TIMEOUT_MS", "750");
    let config = BackendConfig::load(Some(&file_path));
    std::env::remove_var("ARCANUM_BUSY_TIMEOUT_MS");

    let config = config.unwrap();
    assert_eq!(config.busy_timeout_ms, 750);
    assert!(config.is_in_memory());
}
