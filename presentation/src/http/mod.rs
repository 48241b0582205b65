//! HTTP routing, handlers, and wire types.

pub mod dto;
pub mod guard;
pub mod handlers;
mod router;

pub use router::{AppState, router};
