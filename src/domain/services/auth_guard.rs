#[cfg(test)]
#[path = "auth_guard_test.rs"]
mod tests;

use super::TokenStore;

/// Derives the logged-in state from the token store and caches it for the
/// views. The router re-runs [`AuthGuard::check_auth`] on every route
/// change so an in-app logout flips this immediately.
pub struct AuthGuard {
    store: TokenStore,
    pub logged_in: bool,
    pub username: String,
}

impl Default for AuthGuard {
    fn default() -> AuthGuard {
        return AuthGuard::new(TokenStore::default());
    }
}

impl AuthGuard {
    pub fn new(store: TokenStore) -> AuthGuard {
        let mut guard = AuthGuard {
            store,
            logged_in: false,
            username: "".to_string(),
        };
        guard.check_auth();

        return guard;
    }

    pub fn is_authenticated(&self) -> bool {
        return self.store.session().is_authenticated();
    }

    /// Re-derives `{logged_in, username}` from the store.
    pub fn check_auth(&mut self) -> bool {
        let session = self.store.session();
        self.logged_in = session.is_authenticated();

        if self.logged_in {
            self.username = session.username;
        } else {
            self.username = "".to_string();
        }

        return self.logged_in;
    }

    pub fn store(&self) -> &TokenStore {
        return &self.store;
    }
}
