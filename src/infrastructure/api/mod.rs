mod client;

pub use client::HttpApi;

use crate::domain::models::FoodApiBox;

pub struct ApiManager {}

impl ApiManager {
    /// Builds the configured client. The session token is read at build
    /// time, matching the one-command lifetime of the process.
    pub fn get() -> FoodApiBox {
        return Box::<HttpApi>::default();
    }
}
