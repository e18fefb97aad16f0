use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::StorageBackend;

pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn StorageBackend>,
}
