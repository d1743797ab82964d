//! SaaS landing backend
//!
//! Pricing data, a demo registration/login flow, a contact form and a blog
//! listing, backed by an optional document store.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
