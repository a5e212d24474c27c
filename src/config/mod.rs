use std::env;
use std::fmt;

/// Execution mode selected by `APP_ENV`.
///
/// Development mode shares the database client through a process-wide slot;
/// production mode keeps it private to the holder that built it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    Production,
    #[default]
    Development,
}

impl RunMode {
    /// Only the exact value `production` selects production mode.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "production" {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Development => f.write_str("development"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub run_mode: RunMode,
    pub frontend_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            run_mode: env::var("APP_ENV")
                .map(|v| RunMode::parse(&v))
                .unwrap_or_default(),
            frontend_url: env::var("FRONTEND_URL").ok().filter(|v| !v.is_empty()),
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_mode_production_is_exact() {
        assert_eq!(RunMode::parse("production"), RunMode::Production);
        assert_eq!(RunMode::parse(" production\n"), RunMode::Production);
        assert_eq!(RunMode::parse("Production"), RunMode::Development);
        assert_eq!(RunMode::parse("prod"), RunMode::Development);
        assert_eq!(RunMode::parse(""), RunMode::Development);
    }

    #[test]
    fn run_mode_defaults_to_development() {
        assert_eq!(RunMode::default(), RunMode::Development);
        assert!(!RunMode::default().is_production());
        assert!(RunMode::Production.is_production());
    }

    #[test]
    fn run_mode_display() {
        assert_eq!(RunMode::Production.to_string(), "production");
        assert_eq!(RunMode::Development.to_string(), "development");
    }

    const VARS: [&str; 6] = [
        "DATABASE_URL",
        "DATABASE_MAX_CONNECTIONS",
        "BACKEND_HOST",
        "BACKEND_PORT",
        "APP_ENV",
        "FRONTEND_URL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    // One test owns the process environment; splitting it would race.
    #[test]
    fn from_env_reads_environment() {
        clear_env();
        assert_eq!(AppConfig::from_env().unwrap_err(), env::VarError::NotPresent);

        env::set_var("DATABASE_URL", "postgres://localhost/aimod");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://localhost/aimod");
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.run_mode, RunMode::Development);
        assert_eq!(config.frontend_url, None);

        env::set_var("DATABASE_MAX_CONNECTIONS", "25");
        env::set_var("BACKEND_HOST", "127.0.0.1");
        env::set_var("BACKEND_PORT", "8080");
        env::set_var("APP_ENV", "production");
        env::set_var("FRONTEND_URL", "https://aimod.example");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_max_connections, 25);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.run_mode, RunMode::Production);
        assert_eq!(config.frontend_url.as_deref(), Some("https://aimod.example"));

        env::set_var("DATABASE_MAX_CONNECTIONS", "many");
        env::set_var("BACKEND_PORT", "-1");
        env::set_var("APP_ENV", "staging");
        env::set_var("FRONTEND_URL", "");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.port, 3000);
        assert_eq!(config.run_mode, RunMode::Development);
        assert_eq!(config.frontend_url, None);

        clear_env();
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = AppConfig {
            database_url: "postgres://localhost/aimod".to_string(),
            database_max_connections: 10,
            host: "127.0.0.1".to_string(),
            port: 8080,
            run_mode: RunMode::Development,
            frontend_url: None,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
