//! Core domain + application logic for the homework status bot.
//!
//! This crate is intentionally framework-agnostic. The homework API (reqwest)
//! and Telegram (teloxide) live behind ports implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod notifier;
pub mod poller;
pub mod ports;
pub mod validation;

pub use errors::{Error, Result};
