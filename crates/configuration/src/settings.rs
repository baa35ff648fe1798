use crate::error::ConfigError;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; missing values fall back to the
/// defaults below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    pub dashboard: DashboardSettings,
    pub logging: LoggingSettings,
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

/// Location and column layout of the input CSV.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    pub path: PathBuf,
    /// Column holding the calendar date of each row.
    pub period_column: String,
    pub export_column: String,
    pub import_column: String,
    /// Optional partner column, carried through but never aggregated on.
    pub country_column: String,
}

/// Presentation settings for the dashboard page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub title: String,
    /// Preselected year in the dropdown. Falls back to the latest year in the
    /// data when absent from it.
    pub default_year: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8050,
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("gesamter_Datensatz_nach_Land_sortiert.csv"),
            period_column: "Zeitraum".to_string(),
            export_column: "Ausfuhr: Wert".to_string(),
            import_column: "Einfuhr: Wert".to_string(),
            country_column: "Land".to_string(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "Deutschlands Handelsentwicklung".to_string(),
            default_year: 2024,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Config {
    /// Rejects settings the application cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }

        let columns = [
            ("dataset.period_column", &self.dataset.period_column),
            ("dataset.export_column", &self.dataset.export_column),
            ("dataset.import_column", &self.dataset.import_column),
        ];
        for (key, value) in columns {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!("{key} must not be empty")));
            }
        }

        if self.dataset.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
