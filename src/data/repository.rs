use std::sync::Arc;

use async_trait::async_trait;

use crate::model::MarsPhoto;
use crate::network::{MarsApiService, NetworkError};

/// Boundary between the view model and the network transport.
///
/// Every call hits the network; nothing is cached or retried.
#[async_trait]
pub trait MarsPhotosRepository: Send + Sync {
    async fn get_mars_photos(&self) -> Result<Vec<MarsPhoto>, NetworkError>;
}

/// Repository that forwards to a `MarsApiService`.
pub struct NetworkMarsPhotosRepository {
    service: Arc<dyn MarsApiService>,
}

impl NetworkMarsPhotosRepository {
    pub fn new(service: Arc<dyn MarsApiService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MarsPhotosRepository for NetworkMarsPhotosRepository {
    async fn get_mars_photos(&self) -> Result<Vec<MarsPhoto>, NetworkError> {
        self.service.get_photos().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingService {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MarsApiService for CountingService {
        async fn get_photos(&self) -> Result<Vec<MarsPhoto>, NetworkError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![MarsPhoto {
                id: call.to_string(),
                image_url: format!("{call}.jpg"),
            }])
        }
    }

    #[tokio::test]
    async fn every_call_reaches_the_service() {
        let service = Arc::new(CountingService {
            calls: AtomicUsize::new(0),
        });
        let repository = NetworkMarsPhotosRepository::new(service.clone());

        let first = repository.get_mars_photos().await.unwrap();
        let second = repository.get_mars_photos().await.unwrap();

        assert_eq!(first[0].id, "0");
        assert_eq!(second[0].id, "1");
        assert_eq!(service.calls.load(Ordering::SeqCst), 2);
    }
}
