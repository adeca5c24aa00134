use ::feature_gate::BackendType;
use ::feature_gate::BackendVariant;
use ::feature_gate::BaseConfig;
use ::feature_gate::FeatureBackend;
use ::feature_gate::JsonFileBackend;
use anyhow::Result;

// ===== Test Helper Functions =====

fn write_flags(dir: &tempfile::TempDir, json: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join("flags.json");
    std::fs::write(&path, json)?;
    Ok(path)
}

// ===== Unit Tests =====

#[test]
fn test_json_file_backend_reads_both_shapes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_flags(
        &dir,
        r#"{"a": true, "b": {"active": false}, "c": {"active": true}}"#,
    )?;

    let backend = JsonFileBackend::open(&path)?;
    assert_eq!(backend.name(), "json-file");
    assert_eq!(backend.path(), path.as_path());
    assert_eq!(backend.features(), vec!["a", "b", "c"]);
    assert!(backend.exists("b"));
    assert!(backend.is_active("a"));
    assert!(!backend.is_active("b"));
    assert!(!backend.exists("d"));
    assert!(!backend.is_active("d"));
    Ok(())
}

#[test]
fn test_json_file_backend_missing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let err = match JsonFileBackend::open(dir.path().join("absent.json")) {
        Ok(_) => panic!("open should fail for a missing file"),
        Err(err) => err,
    };
    assert!(err.to_string().contains("failed to read flags file"));
    Ok(())
}

#[test]
fn test_json_file_backend_bad_reload_keeps_state() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_flags(&dir, r#"{"a": true}"#)?;
    let backend = JsonFileBackend::open(&path)?;

    std::fs::write(&path, "not json")?;
    let err = backend.reload().unwrap_err();
    assert!(err.to_string().contains("failed to parse flags file"));
    assert!(backend.is_active("a"));
    Ok(())
}

#[test]
fn test_config_builds_json_file_variant() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_flags(&dir, r#"{"search": true}"#)?;

    let config = BaseConfig {
        backend: BackendType::JsonFile,
        flags_path: Some(path),
        ..BaseConfig::default()
    };
    let backend = config.build_backend()?;
    assert!(matches!(backend, BackendVariant::JsonFile(_)));
    assert!(backend.is_active("search"));
    assert_eq!(backend.features(), vec!["search"]);
    Ok(())
}
