//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::catalog::Product;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub handle: &'static str,
    pub title: &'static str,
    pub scientific_name: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub category_token: &'static str,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            handle: product.handle,
            title: product.title,
            scientific_name: product.scientific_name,
            price: product.price,
            image: product.image,
            category_token: product.category.token(),
        }
    }
}

/// Quick view fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/quick_view.html")]
pub struct QuickViewTemplate {
    pub product: ProductView,
}

/// Display quick view fragment (for HTMX).
///
/// The fragment carries a snapshot of the four display fields; its
/// add-to-cart form submits that snapshot, not a product reference.
#[instrument(skip(state))]
pub async fn quick_view(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<QuickViewTemplate> {
    let product = state
        .catalog()
        .find(&handle)
        .ok_or_else(|| AppError::NotFound(handle.clone()))?;

    Ok(QuickViewTemplate {
        product: ProductView::from(product),
    })
}
