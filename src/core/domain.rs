use serde::{Deserialize, Serialize};
use crate::core::library::{CatalogueError, CatalogueResult};
use crate::core::repository::RepositoryStore;

pub const BRANCH_ENV: &str = "CATALOGUE_BRANCH";
pub const DATABASE_URL_ENV: &str = "CATALOGUE_DATABASE_URL";
pub const BIND_ADDRESS_ENV: &str = "CATALOGUE_BIND_ADDRESS";
pub const MAX_CONNECTIONS_ENV: &str = "CATALOGUE_MAX_CONNECTIONS";
pub const STORE_ENV: &str = "CATALOGUE_STORE";

// Configuration abstracts config options for the catalogue service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub database_url: String,
    pub bind_address: String,
    pub max_connections: u32,
    pub store: RepositoryStore,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            database_url: "sqlite://books.db".to_string(),
            bind_address: "0.0.0.0:8080".to_string(),
            max_connections: 5,
            store: RepositoryStore::Sqlite,
        }
    }

    pub fn from_env() -> CatalogueResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Overrides the defaults with whatever `lookup` yields for the CATALOGUE_* keys.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> CatalogueResult<Self> {
        let mut config = Configuration::new(lookup(BRANCH_ENV).as_deref().unwrap_or("dev"));
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            config.database_url = url;
        }
        if let Some(address) = lookup(BIND_ADDRESS_ENV) {
            config.bind_address = address;
        }
        if let Some(max) = lookup(MAX_CONNECTIONS_ENV) {
            config.max_connections = max.parse::<u32>().map_err(|err| CatalogueError::validation(
                format!("invalid {} {:?}: {}", MAX_CONNECTIONS_ENV, max, err).as_str(), None))?;
            if config.max_connections == 0 {
                return Err(CatalogueError::validation(
                    format!("{} must be positive", MAX_CONNECTIONS_ENV).as_str(), None));
            }
        }
        if let Some(store) = lookup(STORE_ENV) {
            config.store = store.parse()?;
        }
        Ok(config)
    }
}
