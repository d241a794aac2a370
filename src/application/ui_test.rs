use anyhow::Result;
use tempdir::TempDir;

use super::confidence_bar;
use super::region_label;
use super::App;
use crate::domain::models::Language;
use crate::domain::models::Route;
use crate::domain::services::AuthGuard;
use crate::domain::services::ResultView;
use crate::domain::services::Router;
use crate::domain::services::TokenStore;
use crate::infrastructure::api::HttpApi;

#[test]
fn it_renders_confidence_bars() {
    insta::assert_snapshot!(confidence_bar(0.0), @"░░░░░░░░░░░░░░░░░░░░");
    insta::assert_snapshot!(confidence_bar(0.5), @"██████████░░░░░░░░░░");
    insta::assert_snapshot!(confidence_bar(0.93), @"███████████████████░");
    insta::assert_snapshot!(confidence_bar(1.0), @"████████████████████");
}

#[test]
fn it_clamps_out_of_range_confidence() {
    insta::assert_snapshot!(confidence_bar(1.7), @"████████████████████");
    insta::assert_snapshot!(confidence_bar(-0.4), @"░░░░░░░░░░░░░░░░░░░░");
}

#[test]
fn it_localizes_region_labels() {
    assert_eq!(region_label("north", Language::VN), "Miền Bắc");
    assert_eq!(region_label("north", Language::EN), "North");
    assert_eq!(region_label("nationwide", Language::VN), "Toàn quốc");

    // Unknown regions pass through as the service sent them.
    assert_eq!(region_label("islands", Language::EN), "islands");
}

#[tokio::test]
async fn it_redirects_to_search_exactly_once_without_a_result_payload() -> Result<()> {
    let tmp_dir = TempDir::new("ui")?;
    let mut app = App {
        language: Language::EN,
        guard: AuthGuard::new(TokenStore::new(tmp_dir.path().join("auth.json"))),
        router: Router::default(),
        api: Box::new(HttpApi::with_url("http://127.0.0.1:1".to_string())),
    };

    app.render_result(ResultView::Missing).await;

    assert_eq!(app.router.active, Route::Search);
    return Ok(());
}
