//! Ordering application module.
//!
//! This crate wires the reservation, catalog and client collaborators into
//! the add-product decision: load, check availability, substitute an
//! equivalent when needed, append a line, persist.

pub mod command;
pub mod handler;

pub use command::AddProductCommand;
pub use handler::AddProductHandler;
