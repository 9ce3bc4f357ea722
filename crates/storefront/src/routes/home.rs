//! Home and about pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub active: &'static str,
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub active: &'static str,
}

/// Display the home page.
pub async fn home() -> impl IntoResponse {
    HomeTemplate { active: "home" }
}

/// Display the about page.
pub async fn about() -> impl IntoResponse {
    AboutTemplate { active: "about" }
}
