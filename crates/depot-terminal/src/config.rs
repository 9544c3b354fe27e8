use anyhow::{Context, Result};
use depot_app::AppConfig;
use std::path::Path;

/// Load the application config.
///
/// No path, or a path that does not exist, yields the defaults. Keys
/// missing from the file take their default values.
pub fn load_app_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    if !path.exists() {
        tracing::info!(path = %path.display(), "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: AppConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_app::Locale;
    use depot_core::{DataStoreMode, Page};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_path_gives_defaults() {
        assert_eq!(load_app_config(None).unwrap(), AppConfig::default());
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("depot.toml");
        assert_eq!(load_app_config(Some(&absent)).unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "locale = \"english\"").unwrap();
        writeln!(file, "haptics_enabled = false").unwrap();

        let config = load_app_config(Some(file.path())).unwrap();
        assert_eq!(config.locale, Locale::English);
        assert!(!config.haptics_enabled);
        assert_eq!(config.default_page, Page::Dashboard);
        assert_eq!(config.data_store_mode, DataStoreMode::Real);
    }

    #[test]
    fn full_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "locale = \"hebrew\"\ndefault_page = \"orders\"\nhaptics_enabled = true\ndata_store_mode = \"demo\"\n"
        )
        .unwrap();

        let config = load_app_config(Some(file.path())).unwrap();
        assert_eq!(config.default_page, Page::Orders);
        assert_eq!(config.data_store_mode, DataStoreMode::Demo);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "locale = 42").unwrap();

        let err = load_app_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }
}
