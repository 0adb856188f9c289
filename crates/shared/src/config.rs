//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Attachment policy configuration.
    #[serde(default)]
    pub uploader: UploaderConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Attachment policy configuration.
///
/// Every field is optional; a missing field leaves the corresponding check
/// unrestricted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploaderConfig {
    /// Allow attaching more than one file.
    #[serde(default)]
    pub multiple: bool,
    /// Accepted types: comma-separated MIME types, `type/*` wildcards or
    /// dot-prefixed extensions.
    #[serde(default)]
    pub accept: Option<String>,
    /// Maximum file size in bytes.
    #[serde(default)]
    pub max_size_bytes: Option<u64>,
    /// URIs of files that were uploaded in an earlier session.
    #[serde(default)]
    pub uploaded_uris: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "dropkit=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Environment variables use the `DROPKIT_` prefix and `__` as the
    /// section separator, e.g. `DROPKIT_UPLOADER__MAX_SIZE_BYTES=1000`.
    /// `DROPKIT_UPLOADER__UPLOADED_URIS` is split on commas.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("DROPKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("uploader.uploaded_uris"),
            )
            .build()?;

        config.try_deserialize()
    }
}
