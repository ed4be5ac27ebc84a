//! Reservations domain module.
//!
//! This crate contains business rules for reservations (an open order's
//! working set of product lines prior to fulfillment), implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod equivalent;
pub mod reservation;

pub use equivalent::SuggestionService;
pub use reservation::{
    Reservation, ReservationLine, ReservationRepository, ReservationStatus,
};
