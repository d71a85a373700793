use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    /// Builds the configuration from environment variables.
    ///
    /// `DATABASE_URL` takes precedence; without it the URL is assembled from
    /// `DB_HOST`, `DB_USER`, `DB_PASSWORD` and `DB_NAME` as a MySQL URL.
    /// `HOST` and `PORT` default to `127.0.0.1:5000`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "mysql://{}:{}@{}/{}",
                require("DB_USER")?,
                require("DB_PASSWORD")?,
                require("DB_HOST")?,
                require("DB_NAME")?,
            ),
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Address the HTTP listener binds to, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
