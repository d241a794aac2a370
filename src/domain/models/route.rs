#[cfg(test)]
#[path = "route_test.rs"]
mod tests;

/// The application's route table. Library and history require a session;
/// everything else is public.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    Result,
    FoodDetail(String),
    Login,
    Library,
    History,
}

impl Route {
    pub fn path(&self) -> String {
        let path = match self {
            Route::Home => "/".to_string(),
            Route::Search => "/search".to_string(),
            Route::Result => "/result".to_string(),
            Route::FoodDetail(name) => format!("/food/{name}"),
            Route::Login => "/login".to_string(),
            Route::Library => "/library".to_string(),
            Route::History => "/history".to_string(),
        };

        return path;
    }

    pub fn is_protected(&self) -> bool {
        return matches!(self, Route::Library | Route::History);
    }
}
