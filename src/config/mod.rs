// src/config/mod.rs
//! Configuration system for simple-encrypt
//!
//! Optional `simple-encrypt.toml` in the working directory, lazily loaded
//! once. Every field has a built-in default.

pub use app::{load, Config, Logging, Paths};

mod app;
mod defaults;
