use super::*;
use std::io::Write;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) {
    let mut file = std::fs::File::create(dir.join(CONFIG_FILE)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

#[test]
fn loads_minimal_config_with_defaults() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "name: storefront\n");

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "storefront");
    assert_eq!(config.database.path, "data/store.duckdb");
    assert_eq!(config.ledger.path, "data/ledger.duckdb");
    assert_eq!(config.failed_policy, AppliedPolicy::Retry);
}

#[test]
fn loads_full_config() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
name: storefront
database:
  path: ":memory:"
ledger:
  path: target/ledger.duckdb
failed_policy: block
"#,
    );

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.database.path, ":memory:");
    assert_eq!(config.ledger.path, "target/ledger.duckdb");
    assert_eq!(config.failed_policy, AppliedPolicy::Block);
}

#[test]
fn missing_file_is_a_config_not_found_error() {
    let dir = tempdir().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn unknown_fields_are_rejected() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "name: storefront\nmigrations_dir: ./up\n");

    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}
