//! Menu item create/edit/delete handlers.
//!
//! The item forms post as multipart so the optional image rides along with
//! the text fields. On edit, a missing file input keeps the current image.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    body::Bytes,
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use tracing::instrument;

use copper_kettle_core::{MenuItemId, Price};

use crate::db::menu::{MenuItemDraft, MenuRepository};
use crate::db::settings;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::services::upload::save_menu_image;
use crate::state::AppState;

use super::StaffView;

/// New item form template.
#[derive(Template, WebTemplate)]
#[template(path = "items/new.html")]
pub struct NewItemTemplate {
    pub active: &'static str,
    pub staff: StaffView,
    pub theme: String,
}

/// Item fields as rendered into the edit form.
#[derive(Clone)]
pub struct ItemFormView {
    pub id: i32,
    pub name: String,
    /// Bare decimal amount for the number input (no currency sign).
    pub price: String,
    pub category: String,
    pub description: String,
    pub image: Option<String>,
}

/// Edit item form template.
#[derive(Template, WebTemplate)]
#[template(path = "items/edit.html")]
pub struct EditItemTemplate {
    pub active: &'static str,
    pub staff: StaffView,
    pub theme: String,
    pub item: ItemFormView,
}

/// An uploaded image file.
struct ImageUpload {
    filename: String,
    bytes: Bytes,
}

/// Parsed multipart item form.
struct ItemFormData {
    name: String,
    price: Price,
    category: String,
    description: Option<String>,
    image: Option<ImageUpload>,
}

/// Read and validate the multipart item form.
async fn read_item_form(mut multipart: Multipart) -> Result<ItemFormData> {
    let mut name = None;
    let mut price_raw = None;
    let mut category = None;
    let mut description = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed form: {e}")))?
    {
        // Own the part name so the field itself can be consumed below
        let field_name = field.name().map(ToOwned::to_owned);
        match field_name.as_deref() {
            Some("name") => name = Some(read_text(field).await?),
            Some("price") => price_raw = Some(read_text(field).await?),
            Some("category") => category = Some(read_text(field).await?),
            Some("description") => description = Some(read_text(field).await?),
            Some("image_file") => {
                let filename = field.file_name().map(ToOwned::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("malformed upload: {e}")))?;
                // A file input left empty still submits an empty part
                if let Some(filename) = filename
                    && !filename.is_empty()
                    && !bytes.is_empty()
                {
                    image = Some(ImageUpload { filename, bytes });
                }
            }
            _ => {}
        }
    }

    let name = require_field(name, "name")?;
    let category = require_field(category, "category")?;
    let price_raw = require_field(price_raw, "price")?;

    let amount: Decimal = price_raw
        .parse()
        .map_err(|_| AppError::BadRequest("price must be a number".to_string()))?;
    if amount.is_sign_negative() {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }

    let description = description.filter(|d| !d.is_empty());

    Ok(ItemFormData {
        name,
        price: Price::new(amount),
        category,
        description,
        image,
    })
}

/// Read a trimmed text field.
async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    let text = field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed form: {e}")))?;
    Ok(text.trim().to_string())
}

/// A required, non-empty text field.
fn require_field(value: Option<String>, label: &str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{label} is required")))
}

/// Display the new item form.
#[instrument(skip(staff, state))]
pub async fn new_form(
    RequireAdmin(staff): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let theme = settings::active_theme(state.pool()).await?;

    Ok(NewItemTemplate {
        active: "dashboard",
        staff: StaffView::from(&staff),
        theme,
    })
}

/// Create a new menu item.
#[instrument(skip(state, multipart))]
pub async fn create(
    RequireAdmin(_staff): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response> {
    let form = read_item_form(multipart).await?;

    let image = match form.image {
        Some(upload) => Some(
            save_menu_image(&state.config().upload_dir, &upload.filename, &upload.bytes).await?,
        ),
        None => None,
    };

    let draft = MenuItemDraft {
        name: form.name,
        price: form.price,
        category: form.category,
        description: form.description,
        image,
    };
    let id = MenuRepository::new(state.pool()).insert(&draft).await?;
    tracing::info!(%id, name = %draft.name, "menu item created");

    Ok(Redirect::to("/admin").into_response())
}

/// Display the edit form for an existing item.
#[instrument(skip(staff, state))]
pub async fn edit_form(
    RequireAdmin(staff): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response> {
    let id = MenuItemId::new(id);
    let item = MenuRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))?;
    let theme = settings::active_theme(state.pool()).await?;

    Ok(EditItemTemplate {
        active: "dashboard",
        staff: StaffView::from(&staff),
        theme,
        item: ItemFormView {
            id: item.id.as_i32(),
            name: item.name,
            price: item.price.amount().to_string(),
            category: item.category,
            description: item.description.unwrap_or_default(),
            image: item.image,
        },
    }
    .into_response())
}

/// Update an existing item, optionally replacing its image.
#[instrument(skip(state, multipart))]
pub async fn update(
    RequireAdmin(_staff): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Response> {
    let id = MenuItemId::new(id);
    let repo = MenuRepository::new(state.pool());
    let existing = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))?;

    let form = read_item_form(multipart).await?;

    // Keep the old image unless a new file was uploaded
    let image = match form.image {
        Some(upload) => Some(
            save_menu_image(&state.config().upload_dir, &upload.filename, &upload.bytes).await?,
        ),
        None => existing.image,
    };

    let draft = MenuItemDraft {
        name: form.name,
        price: form.price,
        category: form.category,
        description: form.description,
        image,
    };
    repo.update(id, &draft).await?;
    tracing::info!(%id, "menu item updated");

    Ok(Redirect::to("/admin").into_response())
}

/// Delete a menu item.
#[instrument(skip(state))]
pub async fn delete(
    RequireAdmin(_staff): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response> {
    let id = MenuItemId::new(id);
    let affected = MenuRepository::new(state.pool()).delete(id).await?;
    if affected == 0 {
        tracing::warn!(%id, "delete for unknown menu item");
    } else {
        tracing::info!(%id, "menu item deleted");
    }

    Ok(Redirect::to("/admin").into_response())
}
