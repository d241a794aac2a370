use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// Two-value UI language selector. Every user-facing string is resolved
/// against this, nothing is persisted server-side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumVariantNames, strum::Display)]
pub enum Language {
    #[default]
    VN,
    EN,
}

impl Language {
    pub fn parse(text: &str) -> Option<Language> {
        return Language::iter().find(|e| return e.to_string() == text.to_uppercase());
    }
}
