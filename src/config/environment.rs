// Start of file: /src/config/environment.rs

// * Environment configuration loaded once at startup,
// * with a pure constructor for tests.

use std::{borrow::Cow, collections::HashMap, fmt, path::PathBuf, str::FromStr};
// * anyhow for convenient error handling
use anyhow::{bail, Context, Result};
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_PASSWORD: &str = "postgres";
const DEFAULT_DB_NAME: &str = "library";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds
const DEFAULT_DB_PORT: u16 = 5432; // Default Postgres port
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;

/// Backing store for the author repository
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorStore {
    Postgres,
    Memory,
}

impl FromStr for AuthorStore {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(AuthorStore::Postgres),
            "memory" => Ok(AuthorStore::Memory),
            other => bail!("Unknown AUTHOR_STORE '{other}', expected 'postgres' or 'memory'"),
        }
    }
}

impl fmt::Display for AuthorStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorStore::Postgres => f.write_str("postgres"),
            AuthorStore::Memory => f.write_str("memory"),
        }
    }
}

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub default_timeout_seconds: u64,
    pub author_store: AuthorStore,
    pub author_seed_path: Option<PathBuf>,
    pub db_host: Cow<'static, str>,
    pub db_port: u16,
    pub db_user: Cow<'static, str>,
    pub db_password: Cow<'static, str>,
    pub db_name: Cow<'static, str>,
    pub db_max_connections: u32,
}

impl EnvironmentVariables {
    // * Loads environment variables from the process (and .env outside production).
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        Self::from_vars(&vars)
    }

    // * Builds the configuration from an explicit variable map, providing defaults if missing
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        fn parsed<T>(value: Option<&str>, key: &str) -> Result<Option<T>>
        where
            T: FromStr,
            T::Err: std::error::Error + Send + Sync + 'static,
        {
            value
                .map(|s| s.trim().parse::<T>().with_context(|| format!("Invalid {key} value")))
                .transpose()
        }

        let environment: Cow<'static, str> = get_var("ENVIRONMENT")
            .map(|s| Cow::Owned(s.into()))
            .unwrap_or_else(|| {
                warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                Cow::Borrowed(DEFAULT_ENVIRONMENT)
            });

        let author_store: AuthorStore = match get_var("AUTHOR_STORE") {
            Some(raw) => raw.parse()?,
            None => AuthorStore::Postgres,
        };

        let db_max_connections: u32 = parsed(get_var("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS")?
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
        if db_max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be greater than zero");
        }

        Ok(Self {
            environment,

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: parsed(get_var("PORT"), "PORT")?.unwrap_or(DEFAULT_PORT),

            default_timeout_seconds: parsed(get_var("DEFAULT_TIMEOUT_SECONDS"), "DEFAULT_TIMEOUT_SECONDS")?
                .unwrap_or(DEFAULT_TIMEOUT),

            author_store,

            author_seed_path: get_var("AUTHOR_SEED_PATH")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),

            db_host: get_var("DB_HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    if author_store == AuthorStore::Postgres {
                        warn!("Missing DB_HOST, defaulting to '{DEFAULT_DB_HOST}'");
                    }
                    Cow::Borrowed(DEFAULT_DB_HOST)
                }),

            db_port: parsed(get_var("DB_PORT"), "DB_PORT")?.unwrap_or(DEFAULT_DB_PORT),

            db_user: get_var("DB_USER")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_DB_USER)),

            db_password: get_var("DB_PASSWORD")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_DB_PASSWORD)),

            db_name: get_var("DB_NAME")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_DB_NAME)),

            db_max_connections,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}


// End of file: /src/config/environment.rs
