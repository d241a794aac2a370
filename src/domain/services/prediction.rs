#[cfg(test)]
#[path = "prediction_test.rs"]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use super::AuthGuard;
use crate::domain::models::is_image_file;
use crate::domain::models::ApiError;
use crate::domain::models::FoodApi;
use crate::domain::models::ImageHandle;
use crate::domain::models::ImageUpload;
use crate::domain::models::Language;
use crate::domain::models::PredictionResult;
use crate::domain::models::UiText;

/// How long the result view waits before sending a payload-less visit back
/// to the search entry point.
pub const REDIRECT_DELAY_MILLIS: u64 = 3000;

/// Drives one image upload through the predict endpoint. The flow owns the
/// busy flag for the analyzing indicator; it is cleared on every exit path
/// exactly once. On success the local display copy of the image travels
/// inside the returned [`PredictionResult`]; on any failure it is released
/// before the message surfaces.
pub struct PredictionFlow {
    language: Language,
    preview_dir: Option<PathBuf>,
    pub busy: bool,
}

impl PredictionFlow {
    pub fn new(language: Language) -> PredictionFlow {
        return PredictionFlow {
            language,
            preview_dir: None,
            busy: false,
        };
    }

    pub fn with_preview_dir(language: Language, preview_dir: PathBuf) -> PredictionFlow {
        return PredictionFlow {
            language,
            preview_dir: Some(preview_dir),
            busy: false,
        };
    }

    /// On success the caller navigates to the result view with the returned
    /// payload. On failure the error is the user-visible message.
    pub async fn submit(
        &mut self,
        api: &dyn FoodApi,
        guard: &AuthGuard,
        source: &Path,
    ) -> Result<PredictionResult, String> {
        if self.busy {
            return Err(UiText::Analyzing.localized(self.language).to_string());
        }

        if !is_image_file(source) {
            return Err(UiText::ImagesOnly.localized(self.language).to_string());
        }

        self.busy = true;
        let res = self.upload(api, guard, source).await;
        self.busy = false;

        return res;
    }

    async fn upload(
        &self,
        api: &dyn FoodApi,
        guard: &AuthGuard,
        source: &Path,
    ) -> Result<PredictionResult, String> {
        let upload = match ImageUpload::read(source) {
            Ok(upload) => upload,
            Err(err) => {
                tracing::error!(err = ?err, "Failed to read image for upload");
                return Err(UiText::GenericError.localized(self.language).to_string());
            }
        };

        let handle = match self.create_handle(source) {
            Ok(handle) => handle,
            Err(err) => {
                tracing::error!(err = ?err, "Failed to create image display copy");
                return Err(UiText::GenericError.localized(self.language).to_string());
            }
        };

        match api.predict(&upload, self.language).await {
            Ok(body) if body.success => {
                return Ok(PredictionResult {
                    food_name: body.food_name,
                    food_info: body.food_info,
                    confidence: body.confidence,
                    related: body.related,
                    image: handle,
                });
            }
            Ok(body) => {
                // The handle drops here, releasing the display copy.
                let message = body.error.unwrap_or_else(|| {
                    return UiText::AnalyzeFailed.localized(self.language).to_string();
                });
                tracing::warn!(message = message, "Prediction rejected by the service");
                return Err(message);
            }
            Err(err) => {
                tracing::error!(err = ?err, "Prediction request failed");
                return Err(self.transport_message(&err, guard.is_authenticated()));
            }
        }
    }

    fn create_handle(&self, source: &Path) -> anyhow::Result<ImageHandle> {
        if let Some(dir) = &self.preview_dir {
            return ImageHandle::create_in(dir, source);
        }

        return ImageHandle::create(source);
    }

    fn transport_message(&self, err: &ApiError, authenticated: bool) -> String {
        let text = match err {
            ApiError::RateLimited => {
                if authenticated {
                    UiText::RateLimitUser.localized(self.language).to_string()
                } else {
                    UiText::RateLimitGuest.localized(self.language).to_string()
                }
            }
            ApiError::Timeout => UiText::RequestTimeout.localized(self.language).to_string(),
            ApiError::Server(message) => {
                if message.is_empty() {
                    UiText::AnalyzeFailed.localized(self.language).to_string()
                } else {
                    message.to_string()
                }
            }
            ApiError::Network => UiText::ServerUnreachable.localized(self.language).to_string(),
        };

        return text;
    }
}

/// What the result view renders. Built from the navigation payload so the
/// three failure shapes stay distinct: arriving with nothing redirects back
/// to search, arriving with a result that lost its food identity shows the
/// data-error state.
#[derive(Debug)]
pub enum ResultView {
    Missing,
    DataError,
    Ready(PredictionResult),
}

impl ResultView {
    pub fn from_payload(payload: Option<PredictionResult>) -> ResultView {
        return match payload {
            None => ResultView::Missing,
            // Dropping the payload here releases its display copy; the
            // data-error view never shows the image.
            Some(result) if result.food_info.is_none() => ResultView::DataError,
            Some(result) => ResultView::Ready(result),
        };
    }
}
