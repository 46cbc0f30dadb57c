//! HTTP handlers for the admin API, redirect pages, and diagnostics.

pub mod admin;
pub mod diagnostics;
pub mod pages;
pub use admin::*;
pub use pages::*;
