//! Terraviva Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing the router to be exercised in tests without a listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
