//! Clients domain module.
//!
//! This crate contains the client entity and its published-language snapshot,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod client;

pub use client::{Client, ClientData, ClientRepository};
