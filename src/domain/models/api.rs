use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use thiserror::Error;

use super::FoodInfo;
use super::FoodSummary;
use super::HistoryEntry;
use super::ImageUpload;
use super::Language;
use super::LibraryQuery;
use super::Pagination;

/// Transport-level failure taxonomy. Validation and data-integrity errors
/// never reach this layer; they are raised client-side.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("the service rate limited this client")]
    RateLimited,
    #[error("the request timed out")]
    Timeout,
    #[error("the service reported an error: {0}")]
    Server(String),
    #[error("the service could not be reached")]
    Network,
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default)]
    pub food_name: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub food_info: Option<FoodInfo>,
    #[serde(default)]
    pub related: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub foods: Vec<FoodSummary>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodDetailResponse {
    pub success: bool,
    #[serde(default)]
    pub food: Option<FoodInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub username: String,
}

/// The food-recognition service as the flows see it. Implementations own
/// transport details; callers only ever observe parsed bodies or an
/// [`ApiError`].
#[async_trait]
pub trait FoodApi {
    /// Used before long flows to verify the service is reachable.
    async fn health_check(&self) -> ApiResult<()>;

    async fn login(&self, username: &str, password: &str) -> ApiResult<AuthResponse>;

    async fn register(&self, username: &str, password: &str) -> ApiResult<AuthResponse>;

    /// Uploads an image as multipart form data together with the UI
    /// language, returning the parsed prediction body. A body with
    /// `success == false` is a valid response, not an error.
    async fn predict(&self, upload: &ImageUpload, language: Language) -> ApiResult<PredictResponse>;

    async fn search_foods(&self, query: &LibraryQuery) -> ApiResult<SearchResponse>;

    async fn food_detail(&self, name: &str, language: Language) -> ApiResult<FoodDetailResponse>;

    async fn history(&self, limit: u32) -> ApiResult<HistoryResponse>;

    async fn delete_history(&self) -> ApiResult<()>;

    async fn delete_history_item(&self, id: &str) -> ApiResult<()>;
}

pub type FoodApiBox = Box<dyn FoodApi + Send + Sync>;
