//! API endpoint handlers.
//!
//! Handlers are thin: decode the request, call into `analysis` or
//! `extraction`, encode the result.

pub mod analyze;
pub mod bench;
pub mod chat;
pub mod health;
pub mod reference;
pub mod upload;
