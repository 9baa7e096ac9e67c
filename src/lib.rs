//! Headless client core for the admin console.
//!
//! Each feature is a layered chain — data source → repository → use case →
//! view model — bound to a central store. The store applies pure reducer
//! transitions; view models are the only writers of their feature's slice.
//! The login feature is fully wired; further features follow the same shape.

pub mod api;
pub mod config;
pub mod login;
pub mod session;
pub mod ui;
