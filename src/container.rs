//! Composition root.
//!
//! Builds the HTTP service and repository once from configuration and hands
//! out shared handles; there is no global instance.

use std::sync::Arc;

use crate::config::Config;
use crate::data::{MarsPhotosRepository, NetworkMarsPhotosRepository};
use crate::network::{HttpMarsApiService, NetworkError, TimeoutConfig};

/// Application-wide dependencies.
pub trait AppContainer {
    fn mars_photos_repository(&self) -> Arc<dyn MarsPhotosRepository>;
}

pub struct DefaultAppContainer {
    mars_photos_repository: Arc<dyn MarsPhotosRepository>,
}

impl DefaultAppContainer {
    pub fn new(config: &Config) -> Result<Self, NetworkError> {
        let service = HttpMarsApiService::new(
            &config.network.base_url,
            TimeoutConfig::from(&config.network),
        )?;
        tracing::info!("Photo endpoint: {}", service.photos_url());

        let repository = NetworkMarsPhotosRepository::new(Arc::new(service));
        Ok(Self {
            mars_photos_repository: Arc::new(repository),
        })
    }
}

impl AppContainer for DefaultAppContainer {
    fn mars_photos_repository(&self) -> Arc<dyn MarsPhotosRepository> {
        Arc::clone(&self.mars_photos_repository)
    }
}
