pub mod error;
pub mod models;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::config::AppConfig;

use self::{
    error::ApiError,
    models::{ErrorBody, GenerateRequest, GenerateResponse, GeneratedPlaylist, HealthStatus},
};

const USER_AGENT: &str = concat!("moodlist/", env!("CARGO_PKG_VERSION"));

/// The backend operations the controller depends on.
#[async_trait]
pub trait PlaylistService: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedPlaylist, ApiError>;
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    pub fn new(config: &AppConfig) -> color_eyre::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_preview(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        debug!("Fetched {} bytes of preview media", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl PlaylistService for ApiService {
    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedPlaylist, ApiError> {
        info!(
            "Requesting playlist for {}/{}/{}",
            request.mood, request.activity, request.time_of_day
        );
        let response = self
            .client
            .post(self.endpoint("/api/generate-playlist"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        interpret_generate_response(status, &body)
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.client.get(self.endpoint("/api/health")).send().await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Maps a generate response to a playlist or the failure it represents.
pub fn interpret_generate_response(
    status: StatusCode,
    body: &[u8],
) -> Result<GeneratedPlaylist, ApiError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }

    let response: GenerateResponse = serde_json::from_slice(body)?;
    if !response.success {
        return Err(ApiError::Rejected {
            message: response.error,
        });
    }
    if response.playlist.is_empty() {
        return Err(ApiError::EmptyPlaylist);
    }

    Ok(GeneratedPlaylist {
        tracks: response.playlist,
        metadata: response.metadata,
    })
}
