//! Terraviva Core - Shared domain types.
//!
//! This crate provides the cart domain used by the storefront:
//! - [`cart`] - The shopping cart and its mutation operations
//! - [`price`] - Display-price parsing and formatting (es-CO convention)
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! sessions, no HTTP. The storefront crate owns persistence and rendering;
//! everything here is testable without a web server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod price;

pub use cart::{AddOutcome, Cart, LineItem};
pub use price::{format_amount, parse_display_price};
