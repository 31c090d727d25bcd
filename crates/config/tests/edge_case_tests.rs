//! Edge case and error scenario tests

use bookcase_config::{Config, ConfigError, ConfigManager};
use std::fs;
use tempfile::TempDir;

fn setup_test_manager() -> Result<(TempDir, ConfigManager), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf())?;
    Ok((temp_dir, manager))
}

#[test]
fn test_corrupted_config_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    fs::write(manager.config_path(), "this is not valid TOML {{{")?;

    assert!(matches!(manager.load(), Err(ConfigError::ParseError { .. })));
    assert_eq!(manager.load_or_default(), Config::default());

    Ok(())
}

#[test]
fn test_unknown_enum_value_is_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    fs::write(
        manager.config_path(),
        "[library]\nduplicate_policy = \"sometimes\"\n",
    )?;

    assert!(matches!(manager.load(), Err(ConfigError::ParseError { .. })));
    Ok(())
}

#[test]
fn test_invalid_values_load_with_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    fs::write(manager.config_path(), "[metadata]\ntimeout_secs = 0\n")?;

    let config = manager.load()?;
    assert_eq!(config.metadata.timeout_secs, 0);
    assert_eq!(manager.validate()?.len(), 1);

    Ok(())
}

#[test]
fn test_save_creates_parent_directories() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let nested_path = temp_dir.path().join("a").join("b").join("c");
    let manager = ConfigManager::with_directory(nested_path)?;

    manager.save(&Config::default())?;
    assert!(manager.config_path().exists());

    Ok(())
}

#[test]
fn test_backup_keeps_previous_contents() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let mut first = Config::default();
    first.metadata.timeout_secs = 20;
    manager.save(&first)?;
    manager.save(&Config::default())?;

    let backup = manager.config_path().with_extension("toml.backup");
    let backed_up: Config = toml::from_str(&fs::read_to_string(backup)?)?;
    assert_eq!(backed_up.metadata.timeout_secs, 20);

    Ok(())
}

#[test]
fn test_concurrent_config_loads() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_dir = temp_dir.path().to_path_buf();
    let manager = ConfigManager::with_directory(config_dir.clone())?;
    manager.initialize()?;

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let dir = config_dir.clone();
            std::thread::spawn(move || {
                if let Ok(mgr) = ConfigManager::with_directory(dir) {
                    for _ in 0..10 {
                        assert!(mgr.load().is_ok());
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().is_ok());
    }

    Ok(())
}
