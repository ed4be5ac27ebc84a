//! `salesdesk-infra` — in-memory adapters for the domain's collaborator
//! contracts.
//!
//! One production-grade implementation per contract: repositories over
//! `RwLock<HashMap>`, a substitution index for equivalents, a rate-table tax
//! policy. Intended for tests/dev and as reference adapters; durable
//! persistence belongs to the surrounding system.

pub mod repositories;
pub mod suggestion;
pub mod tax;


pub use repositories::{
    InMemoryClientRepository, InMemoryProductRepository, InMemoryReservationRepository,
};
pub use suggestion::StaticSuggestionService;
pub use tax::RateTableTaxPolicy;
