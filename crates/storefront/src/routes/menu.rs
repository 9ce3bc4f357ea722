//! Menu page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::db::MenuRepository;
use crate::error::Result;
use crate::models::menu::MenuItem;
use crate::state::AppState;

/// Menu item display data for templates.
#[derive(Clone)]
pub struct MenuItemView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: Option<String>,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            price: item.price.to_string(),
            description: item.description.clone().unwrap_or_default(),
            image: item.image.clone(),
        }
    }
}

/// One category section on the menu page.
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItemView>,
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub active: &'static str,
    pub categories: Vec<MenuCategory>,
}

/// Group items into category sections, preserving the repository's
/// (category, name) ordering.
fn group_by_category(items: &[MenuItem]) -> Vec<MenuCategory> {
    let mut categories: Vec<MenuCategory> = Vec::new();
    for item in items {
        match categories.last_mut() {
            Some(last) if last.name == item.category => last.items.push(item.into()),
            _ => categories.push(MenuCategory {
                name: item.category.clone(),
                items: vec![item.into()],
            }),
        }
    }
    categories
}

/// Display the menu, grouped by category.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = MenuRepository::new(state.pool()).list().await?;

    Ok(MenuTemplate {
        active: "menu",
        categories: group_by_category(&items),
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
            price: Price::new("2.40".parse().unwrap()),
            category: category.to_owned(),
            description: None,
            image: None,
        }
    }

    #[test]
    fn groups_adjacent_categories() {
        let items = vec![
            item("Croissant", "Cake"),
            item("Cappuccino", "Drinks"),
            item("Latte", "Drinks"),
        ];

        let categories = group_by_category(&items);

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Cake");
        assert_eq!(categories[1].items.len(), 2);
    }
}
