//! Request handlers, one module per route group.

pub mod config;
pub mod health;
pub mod submissions;
