use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use url::Url;

use crate::model::MarsPhoto;
use crate::network::error::NetworkError;
use crate::network::timeout::TimeoutConfig;

/// Path of the photo listing, relative to the base URL.
pub const PHOTOS_PATH: &str = "photos";

/// Source of the remote photo list.
#[async_trait]
pub trait MarsApiService: Send + Sync {
    /// Fetch the full photo list with a single request.
    async fn get_photos(&self) -> Result<Vec<MarsPhoto>, NetworkError>;
}

/// Build the photo listing URL from a base URL.
///
/// The base may be given with or without a trailing slash; both resolve to
/// `{base}/photos`.
pub fn photos_url(base_url: &str) -> Result<Url, NetworkError> {
    let invalid = |source| NetworkError::InvalidUrl {
        url: base_url.to_string(),
        source,
    };
    let mut base = Url::parse(base_url).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(PHOTOS_PATH).map_err(invalid)
}

/// `MarsApiService` backed by a reqwest client.
pub struct HttpMarsApiService {
    client: Client,
    photos_url: Url,
}

impl HttpMarsApiService {
    pub fn new(base_url: &str, timeouts: TimeoutConfig) -> Result<Self, NetworkError> {
        let photos_url = photos_url(base_url)?;
        let client = Client::builder()
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(NetworkError::Client)?;

        Ok(Self { client, photos_url })
    }

    pub fn photos_url(&self) -> &Url {
        &self.photos_url
    }
}

#[async_trait]
impl MarsApiService for HttpMarsApiService {
    async fn get_photos(&self) -> Result<Vec<MarsPhoto>, NetworkError> {
        let url = self.photos_url.as_str();
        tracing::debug!("GET {}", url);

        let transport = |source| NetworkError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(self.photos_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Http { status });
        }

        // Read the body first so a malformed payload surfaces as a decode
        // error rather than a generic reqwest error.
        let body = response.bytes().await.map_err(transport)?;
        let photos: Vec<MarsPhoto> = serde_json::from_slice(&body)?;
        tracing::debug!("Decoded {} photos from {}", photos.len(), url);
        Ok(photos)
    }
}
