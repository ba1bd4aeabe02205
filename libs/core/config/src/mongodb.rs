use crate::{ConfigError, FromEnv};

/// MongoDB connection settings.
///
/// Constructed manually for tests and tooling, or loaded from the
/// environment in the apps.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection URL: mongodb://[username:password@]host[:port][/?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name, shown in server logs
    pub app_name: Option<String>,

    /// Maximum number of pooled connections
    pub max_pool_size: u32,

    /// Minimum number of pooled connections
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a config pointing at `url`/`database` with default pool settings.
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Default::default()
        }
    }

    /// Set the application name reported to the server.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "storefront".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}

/// Environment variables:
/// - `MONGODB_URL` (required) - connection string
/// - `MONGODB_DATABASE` (required) - database name
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` / `MONGODB_MIN_POOL_SIZE` (optional, 100/5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, 30)
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URL")
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URL".to_string()))?;
        let database = std::env::var("MONGODB_DATABASE")
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_DATABASE".to_string()))?;

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: parse_env("MONGODB_MAX_POOL_SIZE", "100")?,
            min_pool_size: parse_env("MONGODB_MIN_POOL_SIZE", "5")?,
            connect_timeout_secs: parse_env("MONGODB_CONNECT_TIMEOUT_SECS", "10")?,
            server_selection_timeout_secs: parse_env("MONGODB_SERVER_SELECTION_TIMEOUT_SECS", "30")?,
        })
    }
}
