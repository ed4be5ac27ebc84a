use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use salesdesk_catalog::ProductData;
use salesdesk_clients::ClientData;
use salesdesk_core::{DomainError, DomainResult, Entity, ReservationId};

/// Reservation status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Opened,
    Closed,
}

/// Reservation line: product snapshot + requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationLine {
    product: ProductData,
    quantity: u32,
}

impl ReservationLine {
    pub fn product(&self) -> &ProductData {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Aggregate root: Reservation.
///
/// Mutated exclusively by appending lines while `Opened`. Lines are an
/// ordered sequence; repeated additions of the same product append new
/// lines, never deduplicate - each call is a distinct request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    status: ReservationStatus,
    client: ClientData,
    created_at: DateTime<Utc>,
    lines: Vec<ReservationLine>,
}

impl Reservation {
    /// Open a new, empty reservation for a client.
    pub fn open(id: ReservationId, client: ClientData, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            status: ReservationStatus::Opened,
            client,
            created_at,
            lines: Vec::new(),
        }
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn lines(&self) -> &[ReservationLine] {
        &self.lines
    }

    pub fn is_open(&self) -> bool {
        self.status == ReservationStatus::Opened
    }

    /// Append a line for a product snapshot and quantity.
    ///
    /// Existing lines are never removed or modified. A closed reservation
    /// rejects further additions.
    pub fn add_line(&mut self, product: ProductData, quantity: u32) -> DomainResult<()> {
        if !self.is_open() {
            return Err(DomainError::invariant(
                "cannot add lines to a closed reservation",
            ));
        }

        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        self.lines.push(ReservationLine { product, quantity });
        Ok(())
    }

    /// Close the reservation; no further lines can be added.
    pub fn close(&mut self) {
        self.status = ReservationStatus::Closed;
    }
}

impl Entity for Reservation {
    type Id = ReservationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Collaborator contract: reservation persistence.
///
/// The repository layer owns whatever locking or optimistic-concurrency
/// control is needed when two additions race on the same reservation; this
/// core assumes it owns the loaded aggregate for one operation and issues at
/// most one save.
pub trait ReservationRepository {
    fn load(&self, id: &ReservationId) -> DomainResult<Reservation>;
    fn save(&self, reservation: &Reservation) -> DomainResult<()>;
}

impl<T: ReservationRepository + ?Sized> ReservationRepository for &T {
    fn load(&self, id: &ReservationId) -> DomainResult<Reservation> {
        (**self).load(id)
    }

    fn save(&self, reservation: &Reservation) -> DomainResult<()> {
        (**self).save(reservation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesdesk_catalog::ProductType;
    use salesdesk_core::{ClientId, Money, ProductId};

    fn test_client() -> ClientData {
        ClientData::new(ClientId::new("1").unwrap(), "client")
    }

    fn test_product_data(id: &str) -> ProductData {
        ProductData::new(
            ProductId::new(id).unwrap(),
            Money::from_major(122),
            "product",
            ProductType::Standard,
        )
    }

    fn open_reservation() -> Reservation {
        Reservation::open(ReservationId::new("1").unwrap(), test_client(), Utc::now())
    }

    #[test]
    fn open_reservation_starts_empty() {
        let reservation = open_reservation();
        assert!(reservation.is_open());
        assert!(reservation.lines().is_empty());
    }

    #[test]
    fn add_line_appends_in_order() {
        let mut reservation = open_reservation();
        reservation.add_line(test_product_data("1"), 5).unwrap();
        reservation.add_line(test_product_data("2"), 3).unwrap();

        let lines = reservation.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product().id(), &ProductId::new("1").unwrap());
        assert_eq!(lines[0].quantity(), 5);
        assert_eq!(lines[1].product().id(), &ProductId::new("2").unwrap());
    }

    #[test]
    fn repeated_adds_of_same_product_never_deduplicate() {
        let mut reservation = open_reservation();
        for _ in 0..3 {
            reservation.add_line(test_product_data("1"), 5).unwrap();
        }
        assert_eq!(reservation.lines().len(), 3);
    }

    #[test]
    fn closed_reservation_rejects_additions() {
        let mut reservation = open_reservation();
        reservation.close();
        assert_eq!(reservation.status(), ReservationStatus::Closed);

        let err = reservation
            .add_line(test_product_data("1"), 5)
            .unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("closed reservation") => {}
            _ => panic!("Expected InvariantViolation for closed reservation"),
        }
        assert!(reservation.lines().is_empty());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut reservation = open_reservation();
        let err = reservation.add_line(test_product_data("1"), 0).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("quantity") => {}
            _ => panic!("Expected Validation error for zero quantity"),
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the line sequence grows by exactly one per
            /// successful add, preserving all prior lines.
            #[test]
            fn adds_are_append_only(quantities in proptest::collection::vec(1u32..100, 0..20)) {
                let mut reservation = open_reservation();
                for (i, q) in quantities.iter().enumerate() {
                    let before = reservation.lines().to_vec();
                    reservation.add_line(test_product_data("1"), *q).unwrap();
                    prop_assert_eq!(reservation.lines().len(), i + 1);
                    prop_assert_eq!(&reservation.lines()[..i], &before[..]);
                }
            }
        }
    }
}
