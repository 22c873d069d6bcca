//! Configuration loading for the Dendrite CLI.

use std::fs;

use log::debug;

use dendrite::config::LayoutConfig;

use crate::error::CliError;

/// Loads a [`LayoutConfig`] from an optional TOML file path.
///
/// Falls back to the default configuration when no path is given. The
/// loaded configuration is validated before use.
///
/// # Errors
///
/// Returns [`CliError`] when the file cannot be read, parsed, or fails
/// validation.
pub fn load_config(path: Option<&String>) -> Result<LayoutConfig, CliError> {
    let Some(path) = path else {
        debug!("No configuration file given, using defaults");
        return Ok(LayoutConfig::default());
    };

    let contents = fs::read_to_string(path)?;
    let config: LayoutConfig = toml::from_str(&contents)?;
    config.validate()?;

    debug!(config_path = path.as_str(); "Loaded layout configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_path_uses_defaults() {
        let config = load_config(None).expect("defaults load");
        assert_eq!(config.first_generation_limit(), 10);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "main_radius = 300.0\nmax_child_attempts = 8").expect("write config");

        let path = file.path().to_string_lossy().to_string();
        let config = load_config(Some(&path)).expect("config loads");

        assert_eq!(config.main_radius(), 300.0);
        assert_eq!(config.max_child_attempts(), 8);
        // Unset fields keep their defaults
        assert_eq!(config.first_generation_limit(), 10);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "main_radius = -1.0").expect("write config");

        let path = file.path().to_string_lossy().to_string();
        assert!(matches!(
            load_config(Some(&path)),
            Err(CliError::Config(_))
        ));
    }
}
