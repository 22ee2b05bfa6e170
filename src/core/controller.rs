use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalogue::domain::CatalogueService;
use crate::catalogue::factory;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::CatalogueResult;

#[derive(Clone)]
pub struct AppState {
    pub catalogue_service: Arc<dyn CatalogueService>,
}

impl AppState {
    pub fn new(catalogue_service: Arc<dyn CatalogueService>) -> AppState {
        AppState {
            catalogue_service,
        }
    }

    pub async fn build(config: &Configuration) -> CatalogueResult<AppState> {
        let catalogue_service = factory::create_catalogue_service(config, config.store).await?;
        Ok(AppState::new(catalogue_service))
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { .. } => {
                tracing::error!(error = %err, "database failure");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::DuplicateKey { message } => {
                (StatusCode::CONFLICT, message)
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, String::new())
            }
            CommandError::Runtime { .. } => {
                tracing::error!(error = %err, "runtime failure");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { message } => {
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let (status, body) = ServerError::from(CommandError::NotFound { message: "gone".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert!(body.is_empty());
        let (status, _) = ServerError::from(CommandError::DuplicateKey { message: "dup".to_string() });
        assert_eq!(StatusCode::CONFLICT, status);
        let (status, _) = ServerError::from(CommandError::Validation { message: "bad".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::Database { message: "db".to_string(), reason_code: None, retryable: false });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }
}
