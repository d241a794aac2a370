#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApiError;
use crate::domain::models::ApiResult;
use crate::domain::models::AuthResponse;
use crate::domain::models::FoodApi;
use crate::domain::models::FoodDetailResponse;
use crate::domain::models::HistoryResponse;
use crate::domain::models::ImageUpload;
use crate::domain::models::Language;
use crate::domain::models::LibraryQuery;
use crate::domain::models::PredictResponse;
use crate::domain::models::SearchResponse;
use crate::domain::services::TokenStore;

const DEFAULT_TIMEOUT_MILLIS: u64 = 30000;

fn classify(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }

    return ApiError::Network;
}

fn decode_err(err: reqwest::Error) -> ApiError {
    tracing::error!(err = ?err, "Failed to decode response body");
    return ApiError::Server("invalid response body".to_string());
}

/// Pulls the server's own words out of an error response so they can be
/// surfaced verbatim. Auth endpoints use `message`, the rest use `error`.
async fn parse_error(res: reqwest::Response) -> ApiError {
    let status = res.status();
    if status.as_u16() == 429 {
        return ApiError::RateLimited;
    }

    let fallback = format!("HTTP {}", status.as_u16());
    let body = res.json::<ErrorBody>().await.unwrap_or_default();
    let message = body.message.or(body.error).unwrap_or(fallback);

    return ApiError::Server(message);
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AuthRequest {
    username: String,
    password: String,
}

pub struct HttpApi {
    url: String,
    timeout: Duration,
    token: String,
}

impl Default for HttpApi {
    fn default() -> HttpApi {
        let timeout = Config::get(ConfigKey::RequestTimeout)
            .parse::<u64>()
            .unwrap_or(DEFAULT_TIMEOUT_MILLIS);

        return HttpApi::new(
            Config::get(ConfigKey::ApiUrl),
            timeout,
            TokenStore::default().token(),
        );
    }
}

impl HttpApi {
    pub fn new(url: String, timeout_millis: u64, token: String) -> HttpApi {
        return HttpApi {
            url,
            timeout: Duration::from_millis(timeout_millis),
            token,
        };
    }

    pub fn with_url(url: String) -> HttpApi {
        return HttpApi::new(url, DEFAULT_TIMEOUT_MILLIS, "".to_string());
    }

    fn bearer(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.token.is_empty() {
            return builder;
        }

        return builder.bearer_auth(&self.token);
    }
}

#[async_trait]
impl FoodApi for HttpApi {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> ApiResult<()> {
        let res = reqwest::Client::new()
            .get(format!("{url}/health", url = self.url))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;

        if !res.status().is_success() {
            return Err(parse_error(res).await);
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn login(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
        let req = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/auth/login", url = self.url))
            .timeout(self.timeout)
            .json(&req)
            .send()
            .await
            .map_err(classify)?;

        if !res.status().is_success() {
            return Err(parse_error(res).await);
        }

        return res.json::<AuthResponse>().await.map_err(decode_err);
    }

    #[allow(clippy::implicit_return)]
    async fn register(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
        let req = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/auth/register", url = self.url))
            .timeout(self.timeout)
            .json(&req)
            .send()
            .await
            .map_err(classify)?;

        if !res.status().is_success() {
            return Err(parse_error(res).await);
        }

        return res.json::<AuthResponse>().await.map_err(decode_err);
    }

    #[allow(clippy::implicit_return)]
    async fn predict(&self, upload: &ImageUpload, language: Language) -> ApiResult<PredictResponse> {
        let part = multipart::Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        let form = multipart::Form::new()
            .part("image", part)
            .text("lang", language.to_string());

        let res = self
            .bearer(
                reqwest::Client::new()
                    .post(format!("{url}/predict", url = self.url))
                    .timeout(self.timeout),
            )
            .multipart(form)
            .send()
            .await
            .map_err(classify)?;

        if !res.status().is_success() {
            return Err(parse_error(res).await);
        }

        return res.json::<PredictResponse>().await.map_err(decode_err);
    }

    #[allow(clippy::implicit_return)]
    async fn search_foods(&self, query: &LibraryQuery) -> ApiResult<SearchResponse> {
        let res = reqwest::Client::new()
            .get(format!("{url}/foods/search", url = self.url))
            .timeout(self.timeout)
            .query(&query.params())
            .send()
            .await
            .map_err(classify)?;

        if !res.status().is_success() {
            return Err(parse_error(res).await);
        }

        return res.json::<SearchResponse>().await.map_err(decode_err);
    }

    #[allow(clippy::implicit_return)]
    async fn food_detail(&self, name: &str, language: Language) -> ApiResult<FoodDetailResponse> {
        let res = reqwest::Client::new()
            .get(format!("{url}/food/{name}", url = self.url))
            .timeout(self.timeout)
            .query(&[("lang", language.to_string())])
            .send()
            .await
            .map_err(classify)?;

        if !res.status().is_success() {
            return Err(parse_error(res).await);
        }

        return res.json::<FoodDetailResponse>().await.map_err(decode_err);
    }

    #[allow(clippy::implicit_return)]
    async fn history(&self, limit: u32) -> ApiResult<HistoryResponse> {
        let res = self
            .bearer(
                reqwest::Client::new()
                    .get(format!("{url}/history", url = self.url))
                    .timeout(self.timeout),
            )
            .query(&[("limit", limit.to_string())])
            .send()
            .await
            .map_err(classify)?;

        if !res.status().is_success() {
            return Err(parse_error(res).await);
        }

        return res.json::<HistoryResponse>().await.map_err(decode_err);
    }

    #[allow(clippy::implicit_return)]
    async fn delete_history(&self) -> ApiResult<()> {
        let res = self
            .bearer(
                reqwest::Client::new()
                    .delete(format!("{url}/history", url = self.url))
                    .timeout(self.timeout),
            )
            .send()
            .await
            .map_err(classify)?;

        if !res.status().is_success() {
            return Err(parse_error(res).await);
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn delete_history_item(&self, id: &str) -> ApiResult<()> {
        let res = self
            .bearer(
                reqwest::Client::new()
                    .delete(format!("{url}/history/{id}", url = self.url))
                    .timeout(self.timeout),
            )
            .send()
            .await
            .map_err(classify)?;

        if !res.status().is_success() {
            return Err(parse_error(res).await);
        }

        return Ok(());
    }
}
