use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::{CatalogueError, CatalogueResult};

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // all entities in store order
    async fn find_all(&self) -> CatalogueResult<Vec<Entity>>;

    // get an entity by its surrogate id
    async fn find_by_id(&self, id: i64) -> CatalogueResult<Option<Entity>>;

    // inserts an entity without id, updates an entity with one
    async fn save(&self, entity: &Entity) -> CatalogueResult<Entity>;

    // delete an entity by its surrogate id
    async fn delete_by_id(&self, id: i64) -> CatalogueResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Sqlite,
    LocalSqlite,
}

impl FromStr for RepositoryStore {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(RepositoryStore::Sqlite),
            "local" => Ok(RepositoryStore::LocalSqlite),
            other => Err(CatalogueError::validation(
                format!("unknown repository store {}", other).as_str(), None)),
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::Sqlite => write!(f, "sqlite"),
            RepositoryStore::LocalSqlite => write!(f, "local"),
        }
    }
}
