use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::ImageHandle;

/// Full dish record as returned by the detail and predict endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodInfo {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// One library search hit. The service uses the dish's class name as its id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub description: String,
}

/// One saved prediction, newest first from the service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub food_name: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub timestamp: String,
}

/// A completed prediction, handed to the result view as the navigation
/// payload. Owning it also owns the local display copy of the uploaded
/// image, so dropping the result releases the image exactly once.
#[derive(Debug)]
pub struct PredictionResult {
    pub food_name: String,
    pub food_info: Option<FoodInfo>,
    pub confidence: f64,
    pub related: Vec<String>,
    pub image: ImageHandle,
}
