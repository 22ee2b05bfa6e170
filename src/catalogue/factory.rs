use std::sync::Arc;
use crate::books::factory;
use crate::catalogue::domain::CatalogueService;
use crate::catalogue::domain::service::CatalogueServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::CatalogueResult;
use crate::core::repository::RepositoryStore;

pub async fn create_catalogue_service(config: &Configuration, store: RepositoryStore) -> CatalogueResult<Arc<dyn CatalogueService>> {
    let book_repo = factory::create_book_repository(config, store).await?;
    Ok(Arc::new(CatalogueServiceImpl::new(config, book_repo)))
}
