//! Session-related types.
//!
//! The cart is the only state the storefront keeps in the session.

/// Session keys for storefront data.
pub mod keys {
    /// Key for the serialized shopping cart.
    pub const CART: &str = "cart";
}
