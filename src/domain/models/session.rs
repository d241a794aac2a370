use serde_derive::Deserialize;
use serde_derive::Serialize;

/// The persisted auth token/username pair. The username is only meaningful
/// while a token is present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    pub fn new(token: &str, username: &str) -> Session {
        return Session {
            token: token.to_string(),
            username: username.to_string(),
        };
    }

    pub fn is_authenticated(&self) -> bool {
        return !self.token.is_empty();
    }
}
