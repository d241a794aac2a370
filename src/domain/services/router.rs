#[cfg(test)]
#[path = "router_test.rs"]
mod tests;

use std::time::Duration;

use super::AuthGuard;
use crate::domain::models::Route;

/// Minimum duration of the transient loading indicator shown on every route
/// change. Cosmetic only, never a synchronization point.
pub const ROUTE_LOADING_MILLIS: u64 = 300;

/// Binds routes to the auth guard. Navigation re-derives the guard state
/// first, so a protected destination is swapped for the login route before
/// anything gets rendered; the protected view never appears, not even
/// transiently.
pub struct Router {
    pub active: Route,
}

impl Default for Router {
    fn default() -> Router {
        return Router { active: Route::Home };
    }
}

impl Router {
    pub fn resolve(requested: Route, guard: &mut AuthGuard) -> Route {
        guard.check_auth();

        if requested.is_protected() && !guard.logged_in {
            tracing::debug!(requested = requested.path(), "Redirecting to login");
            return Route::Login;
        }

        return requested;
    }

    /// Resolves the requested route against the guard and activates the
    /// destination. Returns the route that was actually activated.
    pub fn navigate(&mut self, requested: Route, guard: &mut AuthGuard) -> &Route {
        let destination = Router::resolve(requested, guard);
        tracing::debug!(destination = destination.path(), "Route change");
        self.active = destination;

        return &self.active;
    }

    /// The cosmetic full-screen loading tick that accompanies every route
    /// change, independent of the destination's own data loading.
    pub async fn loading_tick(&self) {
        tokio::time::sleep(Duration::from_millis(ROUTE_LOADING_MILLIS)).await;
    }
}
