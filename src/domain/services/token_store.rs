#[cfg(test)]
#[path = "token_store_test.rs"]
mod tests;

use std::fs;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Session;

/// Persists the session token/username pair across runs. Pure storage:
/// token contents are never inspected here, and writes are whole-file
/// replace-or-clear.
pub struct TokenStore {
    pub file_path: PathBuf,
}

impl Default for TokenStore {
    fn default() -> TokenStore {
        return TokenStore {
            file_path: PathBuf::from(Config::get(ConfigKey::AuthFile)),
        };
    }
}

impl TokenStore {
    pub fn new(file_path: PathBuf) -> TokenStore {
        return TokenStore { file_path };
    }

    fn read(&self) -> Option<Session> {
        let mut file = fs::OpenOptions::new()
            .read(true)
            .open(self.file_path.clone())
            .ok()?;

        let mut contents = String::new();
        let _ = file.read_to_string(&mut contents);

        return serde_json::from_str::<Session>(&contents).ok();
    }

    pub fn session(&self) -> Session {
        return self.read().unwrap_or_default();
    }

    pub fn token(&self) -> String {
        return self.session().token;
    }

    pub fn username(&self) -> String {
        return self.session().username;
    }

    pub fn set_tokens(&self, token: &str, username: &str) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(self.file_path.clone())?;

        let text = serde_json::to_string(&Session::new(token, username))?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        return Ok(());
    }

    pub fn clear(&self) -> Result<()> {
        if !self.file_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.file_path)?;
        return Ok(());
    }
}
