use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::Language;

/// Region filter for the library, matching the service's food database
/// regions plus the unfiltered default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    All,
    North,
    Central,
    South,
    Nationwide,
}

impl Region {
    pub fn parse(text: &str) -> Option<Region> {
        return Region::iter().find(|e| return e.to_string() == text.to_lowercase());
    }
}

/// The full parameter set of one library search request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LibraryQuery {
    pub language: Language,
    pub page: u32,
    pub per_page: u32,
    pub region: Region,
    pub search: String,
}

impl LibraryQuery {
    /// Query-string pairs in the order the service documents them.
    pub fn params(&self) -> Vec<(String, String)> {
        return vec![
            ("lang".to_string(), self.language.to_string()),
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
            ("region".to_string(), self.region.to_string()),
            ("search".to_string(), self.search.to_string()),
        ];
    }
}
