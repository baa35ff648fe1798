use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, DashboardSettings, DatasetSettings, LoggingSettings, ServerSettings};

/// Command-line arguments shared by the binaries that read `config.toml`.
#[cfg(feature = "clap")]
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    /// Path to the TOML configuration file. A missing file means built-in defaults.
    #[arg(long, default_value = "config.toml")]
    pub config: std::path::PathBuf,
}

/// Loads the application configuration from a TOML file.
///
/// The file is optional: every setting has a default, so a missing file yields
/// `Config::default()`. The result is validated before it is returned.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(
            config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(false),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:8050");
        assert_eq!(config.dataset.export_column, "Ausfuhr: Wert");
        assert_eq!(config.dashboard.default_year, 2024);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let file = write_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [dataset]
            path = "data/handel.csv"

            [dashboard]
            default_year = 2022
            "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.dataset.path, std::path::PathBuf::from("data/handel.csv"));
        assert_eq!(config.dataset.period_column, "Zeitraum");
        assert_eq!(config.dashboard.default_year, 2022);
        assert_eq!(config.dashboard.title, "Deutschlands Handelsentwicklung");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn zero_port_is_rejected() {
        let file = write_config("[server]\nport = 0\n");

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn blank_column_name_is_rejected() {
        let file = write_config("[dataset]\nexport_column = \"  \"\n");

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("dataset.export_column"));
    }

    #[test]
    fn malformed_toml_is_a_load_error() {
        let file = write_config("[server\nport = ");

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
