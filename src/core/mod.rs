//! Core library components.
//!
//! Key handling, .env parsing, authenticated encryption and the file
//! operations built from them. Nothing here prints to the terminal.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod env;
pub mod key;
pub mod pipeline;
pub mod store;
