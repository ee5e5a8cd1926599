//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Environment variable holding the path of the YAML configuration file
pub const CONFIG_ENV_VAR: &str = "BARBERSHOP_CONFIG";

/// Complete configuration of the site
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    /// Staff accounts allowed into the order desk
    pub staff: Vec<StaffAccount>,
    /// Masters and services loaded into the store at start-up
    pub catalog: CatalogConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Site-wide presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    /// How many published reviews the landing page shows
    pub landing_reviews: usize,
    /// Where unauthenticated staff requests are redirected
    pub login_url: String,
    /// Who may open the order desk: `authenticated` or `staff:name,name`
    pub staff_policy: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Barbershop".to_string(),
            landing_reviews: 5,
            login_url: "/login/".to_string(),
            staff_policy: "authenticated".to_string(),
        }
    }
}

/// A staff member and the token identifying them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffAccount {
    pub username: String,
    pub token: String,
}

/// Catalog seed data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub services: Vec<ServiceSeed>,
    pub masters: Vec<MasterSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSeed {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: u32,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterSeed {
    pub name: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Names of services from `catalog.services`
    #[serde(default)]
    pub services: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `BARBERSHOP_CONFIG`, or use defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_yaml_file(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    /// Check values serde cannot check on its own
    ///
    /// Service names referenced by masters are checked when the catalog
    /// is seeded, not here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.bind".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let mut usernames = HashSet::new();
        let mut tokens = HashSet::new();
        for account in &self.staff {
            if account.token.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("staff.{}.token", account.username),
                    message: "must not be empty".to_string(),
                });
            }
            if !usernames.insert(account.username.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "staff".to_string(),
                    message: format!("duplicate username '{}'", account.username),
                });
            }
            if !tokens.insert(account.token.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("staff.{}.token", account.username),
                    message: "token is shared with another account".to_string(),
                });
            }
        }

        Ok(())
    }

    /// A small catalog used when no configuration file is given
    pub fn demo() -> Self {
        let service = |name: &str, description: &str, price, duration_minutes| ServiceSeed {
            name: name.to_string(),
            description: description.to_string(),
            price,
            duration_minutes,
        };
        let master = |name: &str, experience: &str, services: &[&str]| MasterSeed {
            name: name.to_string(),
            experience: experience.to_string(),
            is_active: true,
            services: services.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            catalog: CatalogConfig {
                services: vec![
                    service("Men's haircut", "Clipper and scissors cut", 1500, 45),
                    service("Beard trim", "Shape and line-up", 900, 30),
                    service("Royal shave", "Hot towel straight razor shave", 1200, 40),
                ],
                masters: vec![
                    master("Oleg", "8 years", &["Men's haircut", "Royal shave"]),
                    master("Anna", "4 years", &["Men's haircut", "Beard trim"]),
                ],
            },
            ..Self::default()
        }
    }
}
