use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Admin password; when unset every visitor is admin
    pub admin_password: Option<String>,
    pub secure_cookies: bool,
}

impl Config {
    /// Load `.env.local` and `.env` (if present), then read the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::from_filename(".env.local").ok();
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid {
                    name: "PORT",
                    value,
                })?,
            None => 8000,
        };

        let admin_password = lookup("ADMIN_PASSWORD").filter(|p| !p.is_empty());

        let secure_cookies = match lookup("SECURE_COOKIES").as_deref() {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "SECURE_COOKIES",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            database_url,
            port,
            admin_password,
            secure_cookies,
        })
    }
}
