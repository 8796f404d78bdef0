//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page
//! reloads. The whole cart is serialized into the session after every
//! mutation; a malformed or absent session record degrades to an empty
//! cart. Mutation responses carry an `HX-Trigger: cart-updated` header
//! so the badge and sidebar re-render from fresh state.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::AppendHeaders;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use terraviva_core::{AddOutcome, Cart};

use crate::error::Result;
use crate::models::session_keys;

/// Header that tells HTMX listeners the cart changed.
const CART_UPDATED_TRIGGER: (&str, &str) = ("HX-Trigger", "cart-updated");

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    /// Positional index captured at render time; mutation forms echo it back.
    pub index: usize,
    pub title: String,
    pub img: String,
    pub quantity: u32,
    /// Unit price times quantity, formatted for display.
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartViewModel {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub is_empty: bool,
}

impl From<&Cart> for CartViewModel {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartItemView {
                    index,
                    title: item.title.clone(),
                    img: item.img.clone(),
                    quantity: item.quantity,
                    line_price: terraviva_core::format_amount(item.line_amount()),
                })
                .collect(),
            total: cart.total_value(),
            is_empty: cart.is_empty(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Restore the cart from the session, degrading to empty on any failure.
pub(crate) async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the cart into the session.
pub(crate) async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Erase the persisted cart record. Used on checkout confirmation.
pub(crate) async fn erase_cart(session: &Session) -> Result<()> {
    session.remove::<Cart>(session_keys::CART).await?;
    Ok(())
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data: the product snapshot as currently displayed.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub title: String,
    pub price: String,
    pub img: String,
}

/// Positional form data for quantity and removal controls.
#[derive(Debug, Deserialize)]
pub struct LineIndexForm {
    pub index: usize,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart sidebar contents fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartViewModel,
}

/// Cart count badge fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Transient acknowledgment fragment shown after adding to the cart.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the cart sidebar contents.
#[instrument(skip(session))]
pub async fn show(session: Session) -> CartItemsTemplate {
    let cart = load_cart(&session).await;
    CartItemsTemplate {
        cart: CartViewModel::from(&cart),
    }
}

/// Render the cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> CartCountTemplate {
    let cart = load_cart(&session).await;
    CartCountTemplate {
        count: cart.total_item_count(),
    }
}

/// Add one unit of a product (HTMX).
///
/// A second add for the same title merges into the existing line item
/// instead of appending. Returns a toast fragment acknowledging which
/// of the two happened.
#[instrument(skip(session, form))]
pub async fn add(
    session: Session,
    axum::Form(form): axum::Form<AddToCartForm>,
) -> Result<(AppendHeaders<[(&'static str, &'static str); 1]>, ToastTemplate)> {
    let mut cart = load_cart(&session).await;
    let message = match cart.add(form.title.clone(), form.price, form.img) {
        AddOutcome::Added => format!("{} añadido", form.title),
        AddOutcome::Merged(quantity) => format!("+1 {} (Total: {quantity})", form.title),
    };
    save_cart(&session, &cart).await?;

    Ok((AppendHeaders([CART_UPDATED_TRIGGER]), ToastTemplate { message }))
}

/// Increase the quantity of a line item (HTMX).
#[instrument(skip(session))]
pub async fn increase(
    session: Session,
    axum::Form(form): axum::Form<LineIndexForm>,
) -> Result<(AppendHeaders<[(&'static str, &'static str); 1]>, CartItemsTemplate)> {
    let mut cart = load_cart(&session).await;
    cart.increment(form.index);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([CART_UPDATED_TRIGGER]),
        CartItemsTemplate {
            cart: CartViewModel::from(&cart),
        },
    ))
}

/// Decrease the quantity of a line item, flooring at 1 (HTMX).
///
/// Never removes the line item; the remove control is a distinct action.
#[instrument(skip(session))]
pub async fn decrease(
    session: Session,
    axum::Form(form): axum::Form<LineIndexForm>,
) -> Result<(AppendHeaders<[(&'static str, &'static str); 1]>, CartItemsTemplate)> {
    let mut cart = load_cart(&session).await;
    cart.decrement(form.index);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([CART_UPDATED_TRIGGER]),
        CartItemsTemplate {
            cart: CartViewModel::from(&cart),
        },
    ))
}

/// Remove a line item (HTMX).
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    axum::Form(form): axum::Form<LineIndexForm>,
) -> Result<(AppendHeaders<[(&'static str, &'static str); 1]>, CartItemsTemplate)> {
    let mut cart = load_cart(&session).await;
    cart.remove(form.index);
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([CART_UPDATED_TRIGGER]),
        CartItemsTemplate {
            cart: CartViewModel::from(&cart),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_model_line_prices_weight_by_quantity() {
        let mut cart = Cart::new();
        cart.add("Aloe Vera", "$10.000", "/static/images/products/aloe-vera.jpg");
        cart.add("Aloe Vera", "$10.000", "/static/images/products/aloe-vera.jpg");
        cart.add("Monstera Deliciosa", "$45.000", "/static/images/products/monstera.jpg");

        let view = CartViewModel::from(&cart);
        assert!(!view.is_empty);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items.first().map(|i| i.line_price.as_str()), Some("$20.000"));
        assert_eq!(view.items.first().map(|i| i.index), Some(0));
        assert_eq!(view.total, "$65.000");
    }

    #[test]
    fn test_view_model_empty_state() {
        let view = CartViewModel::from(&Cart::new());
        assert!(view.is_empty);
        assert!(view.items.is_empty());
        assert_eq!(view.total, "$0");
    }
}
