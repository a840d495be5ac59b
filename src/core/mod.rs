//! Core library components.
//!
//! This module contains the configuration resolution engine and the
//! lifecycle seam; nothing in here prints to the terminal.

pub mod config;
pub mod constants;
pub mod domain;
pub mod env;
pub mod generate;
pub mod launcher;
pub mod lifecycle;
pub mod resolve;
pub mod secrets;
pub mod types;
