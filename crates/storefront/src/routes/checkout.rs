//! Checkout route handlers.
//!
//! The checkout form runs a small state machine per submission:
//! IDLE -> SUBMITTING (valid form) -> SUCCESS (after a fixed simulated
//! processing delay). Invalid submissions bounce back with an inline
//! message and no state change. On success the session cart is erased
//! before the confirmation fragment is rendered, so a reload after
//! dismissing it always sees an empty cart.

use std::time::Duration;

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse, Response};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::cart::{CartViewModel, erase_cart, load_cart};

/// Fixed simulated payment processing delay.
const PAYMENT_PROCESSING_DELAY: Duration = Duration::from_millis(2500);

/// Inline message for rejected submissions.
const REQUIRED_FIELDS_MESSAGE: &str = "Por favor completa todos los campos requeridos.";

/// Supported payment methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Pse,
}

/// Checkout form data.
///
/// Card-detail fields are only meaningful when `payment_method` is
/// `card`; PSE submissions leave them empty.
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub card_name: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub card_expiry: String,
    #[serde(default)]
    pub card_cvc: String,
    #[serde(default)]
    pub bank: String,
}

/// Checkout page template: order summary plus payment form.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub cart: CartViewModel,
}

/// Inline validation message fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_error.html")]
pub struct CheckoutErrorTemplate {
    pub message: &'static str,
}

/// Payment confirmation fragment; its dismiss controls navigate home.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_success.html")]
pub struct CheckoutSuccessTemplate;

// =============================================================================
// Input Formatting
// =============================================================================

/// Reformat a card number to digits-only grouped in blocks of 4.
#[must_use]
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reformat an expiry to digits-only with a slash after the 2nd digit.
#[must_use]
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() >= 2 {
        let (month, year) = digits.split_at(2);
        format!("{month}/{year}")
    } else {
        digits
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Required-field check.
///
/// Contact fields are always required; card-detail fields only when the
/// selected payment method is card. PSE submissions are exempt from the
/// card fields entirely.
fn validate(form: &CheckoutForm) -> std::result::Result<(), &'static str> {
    let contact = [&form.full_name, &form.email, &form.address, &form.city];
    if contact.iter().any(|field| field.trim().is_empty()) {
        return Err(REQUIRED_FIELDS_MESSAGE);
    }

    if form.payment_method == PaymentMethod::Card {
        let card_number = format_card_number(&form.card_number);
        let card_expiry = format_expiry(&form.card_expiry);
        let card = [&form.card_name, &card_number, &card_expiry, &form.card_cvc];
        if card.iter().any(|field| field.trim().is_empty()) {
            return Err(REQUIRED_FIELDS_MESSAGE);
        }
    }

    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the checkout page with the order summary.
#[instrument(skip(session))]
pub async fn show(session: Session) -> CheckoutTemplate {
    let cart = load_cart(&session).await;
    CheckoutTemplate {
        cart: CartViewModel::from(&cart),
    }
}

/// Process a checkout submission (HTMX).
///
/// Valid submissions wait out the simulated processing delay, erase the
/// persisted cart, and return the confirmation fragment. Invalid ones
/// return 422 with an inline message and leave the cart untouched.
#[instrument(skip(session, form))]
pub async fn submit(
    session: Session,
    axum::Form(form): axum::Form<CheckoutForm>,
) -> Result<Response> {
    if let Err(message) = validate(&form) {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            CheckoutErrorTemplate { message },
        )
            .into_response());
    }

    // Simulated payment confirmation; nothing is cancellable once scheduled.
    tokio::time::sleep(PAYMENT_PROCESSING_DELAY).await;

    erase_cart(&session).await?;
    tracing::info!(method = ?form.payment_method, "checkout confirmed");

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CheckoutSuccessTemplate,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_pse_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Ana Rojas".to_string(),
            email: "ana@example.com".to_string(),
            address: "Cra 7 # 12-34".to_string(),
            city: "Bogotá".to_string(),
            payment_method: PaymentMethod::Pse,
            bank: "bancolombia".to_string(),
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_format_card_number_groups_of_four() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4111-1111 22"), "4111 1111 22");
        assert_eq!(format_card_number("abc"), "");
    }

    #[test]
    fn test_format_expiry_inserts_slash_after_two_digits() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1226"), "12/26");
        assert_eq!(format_expiry("12/26"), "12/26");
        assert_eq!(format_expiry("122678"), "12/26");
    }

    #[test]
    fn test_pse_submission_exempts_card_fields() {
        let form = valid_pse_form();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_card_submission_requires_card_fields() {
        let form = CheckoutForm {
            payment_method: PaymentMethod::Card,
            ..valid_pse_form()
        };
        assert_eq!(validate(&form), Err(REQUIRED_FIELDS_MESSAGE));
    }

    #[test]
    fn test_card_submission_with_details_passes() {
        let form = CheckoutForm {
            payment_method: PaymentMethod::Card,
            card_name: "Ana Rojas".to_string(),
            card_number: "4111 1111 1111 1111".to_string(),
            card_expiry: "12/26".to_string(),
            card_cvc: "123".to_string(),
            ..valid_pse_form()
        };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_contact_fields_always_required() {
        let form = CheckoutForm {
            city: String::new(),
            ..valid_pse_form()
        };
        assert_eq!(validate(&form), Err(REQUIRED_FIELDS_MESSAGE));
    }
}
