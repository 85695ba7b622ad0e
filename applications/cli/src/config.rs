/// Command-line client configuration
use config::{ConfigError, Environment, File};
use ohohub_client::{ApiConfig, DEFAULT_API_URL};
use ohohub_storage::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "ohohub.toml";

/// Prefix of environment overrides (`OHOHUB_API_URL`, ...)
pub const ENV_PREFIX: &str = "OHOHUB";

/// Log directives used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str =
    "ohohub=info,ohohub_client=info,ohohub_search=warn,ohohub_storage=warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Base URL of the posts API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Directory holding bookmarks and the theme preference
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Bookmarks shown per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `ohohub.toml` is read if
    /// present. Environment variables override the file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load with an explicit environment source
    pub fn load_from(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(File::from(path.to_path_buf())),
            None => settings.add_source(File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false)),
        };

        let config = settings.add_source(env).build()?.try_deserialize::<Self>()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message(
                "page_size must be at least 1 (set OHOHUB_PAGE_SIZE)".to_string(),
            ));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Message(
                "data_dir cannot be empty (set OHOHUB_DATA_DIR)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn api(&self) -> ApiConfig {
        ApiConfig::new(self.api_url.clone())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".ohohub")
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            data_dir: default_data_dir(),
            page_size: default_page_size(),
        }
    }
}
