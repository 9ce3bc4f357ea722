//! Menu dashboard with search and category filtering.
//!
//! Filtering happens in the handler over the full item list, which is fine
//! at café scale and keeps the repository to plain reads.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::db::{MenuRepository, settings};
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::menu::MenuItem;
use crate::state::AppState;

use super::StaffView;

/// Dashboard filter query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// One row in the dashboard item table.
#[derive(Clone)]
pub struct ItemRowView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub category: String,
    pub image: Option<String>,
}

impl From<&MenuItem> for ItemRowView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            price: item.price.to_string(),
            category: item.category.clone(),
            image: item.image.clone(),
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub active: &'static str,
    pub staff: StaffView,
    pub theme: String,
    pub items: Vec<ItemRowView>,
    pub categories: Vec<String>,
    pub search: String,
    pub category: String,
}

/// Apply the search and category filters to the full item list.
fn filter_items<'a>(items: &'a [MenuItem], search: &str, category: &str) -> Vec<&'a MenuItem> {
    let search = search.to_lowercase();
    items
        .iter()
        .filter(|item| search.is_empty() || item.name.to_lowercase().contains(&search))
        .filter(|item| category.is_empty() || item.category == category)
        .collect()
}

/// Unique categories for the filter dropdown, sorted.
fn unique_categories(items: &[MenuItem]) -> Vec<String> {
    let mut categories: Vec<String> = items.iter().map(|item| item.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Display the menu dashboard.
#[instrument(skip(staff, state))]
pub async fn index(
    RequireAdmin(staff): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse> {
    let items = MenuRepository::new(state.pool()).list().await?;
    let theme = settings::active_theme(state.pool()).await?;

    let search = query.search.unwrap_or_default().trim().to_string();
    let category = query.category.unwrap_or_default().trim().to_string();

    let filtered = filter_items(&items, &search, &category)
        .into_iter()
        .map(ItemRowView::from)
        .collect();

    Ok(DashboardTemplate {
        active: "dashboard",
        staff: StaffView::from(&staff),
        theme,
        items: filtered,
        categories: unique_categories(&items),
        search,
        category,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use copper_kettle_core::{MenuItemId, Price};

    fn item(name: &str, category: &str) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(1),
            name: name.to_owned(),
            price: Price::new("3.20".parse().unwrap()),
            category: category.to_owned(),
            description: None,
            image: None,
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![item("Latte", "Drinks"), item("Croissant", "Cake")];
        let hits = filter_items(&items, "LAT", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().unwrap().name, "Latte");
    }

    #[test]
    fn category_filter_is_exact() {
        let items = vec![item("Latte", "Drinks"), item("Croissant", "Cake")];
        assert_eq!(filter_items(&items, "", "Cake").len(), 1);
        assert!(filter_items(&items, "", "cake").is_empty());
    }

    #[test]
    fn filters_combine() {
        let items = vec![
            item("Latte", "Drinks"),
            item("Iced Latte", "Drinks"),
            item("Latte Cake", "Cake"),
        ];
        assert_eq!(filter_items(&items, "latte", "Drinks").len(), 2);
    }

    #[test]
    fn categories_are_sorted_and_unique() {
        let items = vec![
            item("Latte", "Drinks"),
            item("Croissant", "Cake"),
            item("Cappuccino", "Drinks"),
        ];
        assert_eq!(unique_categories(&items), vec!["Cake", "Drinks"]);
    }
}
