//! Checklist API library.
//!
//! This crate primarily ships a `checklist-api` binary, but we expose a small
//! library surface to enable integration testing.

pub mod api;
pub mod config;
pub mod state;
pub mod store;
