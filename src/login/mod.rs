//! Login feature: domain contracts and the data layer behind them.
//!
//! The presentation side (slice, reducer, view model) lives under
//! `crate::ui::login`.

pub mod data;
pub mod domain;
