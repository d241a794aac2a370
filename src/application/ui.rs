#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Password;
use yansi::Paint;

use crate::application::cli::AppCommand;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApiError;
use crate::domain::models::FoodApiBox;
use crate::domain::models::FoodInfo;
use crate::domain::models::Language;
use crate::domain::models::Region;
use crate::domain::models::Route;
use crate::domain::models::UiText;
use crate::domain::services::AuthFlow;
use crate::domain::services::AuthGuard;
use crate::domain::services::LibraryFlow;
use crate::domain::services::PredictionFlow;
use crate::domain::services::ResultView;
use crate::domain::services::Router;
use crate::domain::services::TokenStore;
use crate::domain::services::LOGIN_REDIRECT_MILLIS;
use crate::domain::services::REDIRECT_DELAY_MILLIS;
use crate::infrastructure::api::ApiManager;

const HISTORY_LIMIT: u32 = 20;
const CONFIDENCE_BAR_CELLS: usize = 20;

pub async fn start(command: AppCommand) -> Result<()> {
    let language =
        Language::parse(&Config::get(ConfigKey::Language)).unwrap_or_default();

    let mut app = App {
        language,
        guard: AuthGuard::default(),
        router: Router::default(),
        api: ApiManager::get(),
    };

    match command {
        AppCommand::Predict { image } => app.predict(&image).await?,
        AppCommand::Library { search, page } => app.library(search, page).await?,
        AppCommand::Food { name } => app.food(&name).await?,
        AppCommand::Login { username } => app.login(username).await?,
        AppCommand::Register { username } => app.register(username).await?,
        AppCommand::Logout => app.logout()?,
        AppCommand::WhoAmI => app.whoami(),
        AppCommand::History { clear, delete } => app.history(clear, delete).await?,
    }

    return Ok(());
}

struct App {
    language: Language,
    guard: AuthGuard,
    router: Router,
    api: FoodApiBox,
}

impl App {
    /// Navigates with the guard applied and shows the transient route
    /// loading tick. Returns the route that was actually activated.
    async fn goto(&mut self, route: Route) -> Route {
        let destination = self.router.navigate(route, &mut self.guard).clone();
        println!(
            "{}",
            Paint::new(UiText::LoadingData.localized(self.language)).dimmed()
        );
        self.router.loading_tick().await;

        return destination;
    }

    async fn predict(&mut self, image: &Path) -> Result<()> {
        self.goto(Route::Search).await;

        // An unreachable server fails the probe before the image goes out.
        if let Err(err) = self.api.health_check().await {
            if err == ApiError::Network {
                println!(
                    "{}",
                    Paint::red(UiText::ServerUnreachable.localized(self.language))
                );
                return Ok(());
            }
            tracing::warn!(err = ?err, "Health check failed");
        }

        println!(
            "{}",
            Paint::yellow(UiText::Analyzing.localized(self.language)).bold()
        );
        println!(
            "{}",
            Paint::new(UiText::AnalyzingWait.localized(self.language)).dimmed()
        );

        let mut flow = PredictionFlow::new(self.language);
        match flow.submit(self.api.as_ref(), &self.guard, image).await {
            Ok(result) => {
                self.goto(Route::Result).await;
                self.render_result(ResultView::from_payload(Some(result)))
                    .await;
            }
            Err(message) => {
                println!("{}", Paint::red(message));
            }
        }

        return Ok(());
    }

    async fn render_result(&mut self, view: ResultView) {
        match view {
            ResultView::Missing => {
                println!("{}", Paint::red(UiText::NoResult.localized(self.language)));
                println!("{}", UiText::Redirecting.localized(self.language));
                tokio::time::sleep(Duration::from_millis(REDIRECT_DELAY_MILLIS)).await;
                self.goto(Route::Search).await;
            }
            ResultView::DataError => {
                println!("{}", Paint::red(UiText::DataError.localized(self.language)));
                println!("{}", UiText::FoodNotFound.localized(self.language));
                println!(
                    "{}",
                    Paint::new(UiText::TryAgain.localized(self.language)).dimmed()
                );
            }
            ResultView::Ready(result) => {
                if let Some(info) = &result.food_info {
                    self.render_food_info(info);
                }

                let percent = result.confidence * 100.0;
                println!(
                    "\n  {} {percent:.1}%",
                    Paint::green(confidence_bar(result.confidence))
                );

                if !result.related.is_empty() {
                    println!("\n  {}", Paint::new(result.related.join(", ")).dimmed());
                }

                println!(
                    "\n  {}",
                    Paint::new(result.image.display_path().display()).dimmed()
                );
                // The payload drops here, which releases the display copy
                // now that it has been shown.
            }
        }
    }

    fn render_food_info(&self, info: &FoodInfo) {
        println!("\n  {}", Paint::green(&info.name).bold());

        if !info.region.is_empty() {
            println!("  {}", region_label(&info.region, self.language));
        }
        if !info.description.is_empty() {
            println!("\n  {}", info.description);
        }
        if !info.ingredients.is_empty() {
            println!("\n  {}", info.ingredients.join(", "));
        }
    }

    async fn library(&mut self, search: String, page: u32) -> Result<()> {
        let destination = self.goto(Route::Library).await;
        if destination == Route::Login {
            self.render_login_required();
            return Ok(());
        }

        let per_page = Config::get(ConfigKey::PerPage).parse::<u32>().unwrap_or(12);
        let region = Region::parse(&Config::get(ConfigKey::Region)).unwrap_or_default();

        let mut flow = LibraryFlow::new(self.language, per_page);
        flow.set_region(region);
        if !search.is_empty() {
            flow.type_search(&search);
            flow.settle_search().await;
        }
        flow.set_page(page);

        flow.refresh(self.api.as_ref()).await;
        flow.teardown();

        if flow.foods.is_empty() {
            println!(
                "{}",
                Paint::yellow(UiText::NoDishesFound.localized(self.language))
            );
            return Ok(());
        }

        println!(
            "{} {}",
            Paint::new(flow.pagination.total).bold(),
            UiText::TotalDishes.localized(self.language)
        );

        for food in &flow.foods {
            println!("\n  {} ({})", Paint::green(&food.name).bold(), food.id);
            if !food.region.is_empty() {
                println!("  {}", region_label(&food.region, self.language));
            }
            if !food.description.is_empty() {
                println!("  {}", Paint::new(&food.description).dimmed());
            }
        }

        if flow.pagination.total_pages > 1 {
            println!(
                "\n{}/{}",
                flow.pagination.page, flow.pagination.total_pages
            );
            if flow.pagination.has_next {
                println!(
                    "{}",
                    Paint::new(format!(
                        "foodlens library --page {}",
                        flow.pagination.page + 1
                    ))
                    .dimmed()
                );
            }
        }

        return Ok(());
    }

    async fn food(&mut self, name: &str) -> Result<()> {
        self.goto(Route::FoodDetail(name.to_string())).await;

        match self.api.food_detail(name, self.language).await {
            Ok(body) if body.success => {
                if let Some(info) = body.food {
                    self.render_food_info(&info);
                } else {
                    println!(
                        "{}",
                        Paint::red(UiText::FoodNotFound.localized(self.language))
                    );
                }
            }
            Ok(body) => {
                let message = body.error.unwrap_or_else(|| {
                    return UiText::FoodNotFound.localized(self.language).to_string();
                });
                println!("{}", Paint::red(message));
            }
            Err(err) => {
                tracing::error!(err = ?err, "Failed to load food detail");
                println!("{}", Paint::red(self.api_error_message(&err)));
            }
        }

        return Ok(());
    }

    async fn login(&mut self, username: Option<String>) -> Result<()> {
        self.goto(Route::Login).await;

        let username = match username {
            Some(username) => username,
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Username")
                .interact_text()?,
        };
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?;

        let store = TokenStore::default();
        let mut flow = AuthFlow::new(self.language);
        let logged_in = flow
            .login(self.api.as_ref(), &store, &username, &password)
            .await?;

        self.render_form_errors(&flow);
        if let Some(message) = flow.state.error_message() {
            println!("{}", Paint::red(message));
            return Ok(());
        }

        if logged_in {
            if let Some(message) = flow.state.success_message() {
                println!("{}", Paint::green(message));
            }
            tokio::time::sleep(Duration::from_millis(LOGIN_REDIRECT_MILLIS)).await;
            self.goto(Route::Home).await;
            println!("{}", Paint::green(&self.guard.username).bold());
        }

        return Ok(());
    }

    async fn register(&mut self, username: Option<String>) -> Result<()> {
        self.goto(Route::Login).await;

        let username = match username {
            Some(username) => username,
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Username")
                .interact_text()?,
        };
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?;
        let confirm_password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Confirm password")
            .interact()?;

        let mut flow = AuthFlow::new(self.language);
        let switch_to_login = flow
            .register(self.api.as_ref(), &username, &password, &confirm_password)
            .await?;

        self.render_form_errors(&flow);
        if let Some(message) = flow.state.error_message() {
            println!("{}", Paint::red(message));
            return Ok(());
        }

        if switch_to_login {
            if let Some(message) = flow.state.success_message() {
                println!("{}", Paint::green(message));
            }
            self.goto(Route::Login).await;
            println!(
                "{}",
                Paint::new(format!("foodlens login -u {username}")).dimmed()
            );
        }

        return Ok(());
    }

    fn logout(&mut self) -> Result<()> {
        if !self.guard.logged_in {
            println!("{}", UiText::NotLoggedIn.localized(self.language));
            return Ok(());
        }

        self.guard.store().clear()?;
        self.guard.check_auth();
        println!(
            "{}",
            Paint::green(UiText::LoggedOut.localized(self.language))
        );

        return Ok(());
    }

    fn whoami(&self) {
        if self.guard.logged_in {
            println!("{}", self.guard.username);
        } else {
            println!("{}", UiText::NotLoggedIn.localized(self.language));
        }
    }

    async fn history(&mut self, clear: bool, delete: Option<String>) -> Result<()> {
        let destination = self.goto(Route::History).await;
        if destination == Route::Login {
            self.render_login_required();
            return Ok(());
        }

        if clear {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(UiText::DeleteConfirm.localized(self.language))
                .default(false)
                .interact()?;
            if !confirmed {
                return Ok(());
            }

            match self.api.delete_history().await {
                Ok(()) => println!(
                    "{}",
                    Paint::green(UiText::DeleteSuccess.localized(self.language))
                ),
                Err(err) => {
                    tracing::error!(err = ?err, "Failed to delete history");
                    println!(
                        "{}",
                        Paint::red(UiText::DeleteError.localized(self.language))
                    );
                }
            }

            return Ok(());
        }

        if let Some(id) = delete {
            match self.api.delete_history_item(&id).await {
                Ok(()) => println!(
                    "{}",
                    Paint::green(UiText::DeleteSuccess.localized(self.language))
                ),
                Err(err) => {
                    tracing::error!(err = ?err, id = id, "Failed to delete history item");
                    println!(
                        "{}",
                        Paint::red(UiText::DeleteError.localized(self.language))
                    );
                }
            }

            return Ok(());
        }

        match self.api.history(HISTORY_LIMIT).await {
            Ok(body) => {
                if body.history.is_empty() {
                    println!("{}", UiText::NoHistory.localized(self.language));
                    return Ok(());
                }

                for entry in &body.history {
                    let percent = entry.confidence * 100.0;
                    println!(
                        "  {} {} {percent:.1}% ({})",
                        Paint::new(&entry.timestamp).dimmed(),
                        Paint::green(&entry.food_name).bold(),
                        entry.id,
                    );
                }
            }
            Err(err) => {
                tracing::error!(err = ?err, "Failed to load history");
                println!("{}", Paint::red(self.api_error_message(&err)));
            }
        }

        return Ok(());
    }

    fn render_login_required(&self) {
        println!(
            "{}",
            Paint::yellow(UiText::RequireLogin.localized(self.language))
        );
        println!(
            "{}: foodlens login",
            UiText::LoginNow.localized(self.language)
        );
    }

    fn render_form_errors(&self, flow: &AuthFlow) {
        for (field, message) in flow.validator.errors() {
            println!("{}", Paint::red(format!("{field}: {message}")));
        }
    }

    fn api_error_message(&self, err: &ApiError) -> String {
        let text = match err {
            ApiError::RateLimited => UiText::RateLimitError.localized(self.language).to_string(),
            ApiError::Timeout => UiText::RequestTimeout.localized(self.language).to_string(),
            ApiError::Server(message) => {
                if message.is_empty() {
                    UiText::GenericError.localized(self.language).to_string()
                } else {
                    message.to_string()
                }
            }
            ApiError::Network => UiText::ServerUnreachable.localized(self.language).to_string(),
        };

        return text;
    }
}

fn confidence_bar(confidence: f64) -> String {
    let filled = (confidence.clamp(0.0, 1.0) * CONFIDENCE_BAR_CELLS as f64).round() as usize;

    return format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(CONFIDENCE_BAR_CELLS - filled)
    );
}

fn region_label(region: &str, language: Language) -> String {
    let label = match (region, language) {
        ("north", Language::VN) => "Miền Bắc",
        ("north", Language::EN) => "North",
        ("central", Language::VN) => "Miền Trung",
        ("central", Language::EN) => "Central",
        ("south", Language::VN) => "Miền Nam",
        ("south", Language::EN) => "South",
        ("nationwide", Language::VN) => "Toàn quốc",
        ("nationwide", Language::EN) => "Nationwide",
        _ => region,
    };

    return label.to_string();
}
