//! In-memory repositories.
//!
//! Intended for tests/dev. Not optimized for performance. Each repository
//! keeps whole aggregates behind an `RwLock<HashMap>`; a poisoned lock maps
//! to `DomainError::Repository`. Save replaces the stored aggregate - any
//! cross-call coordination (locking, optimistic versioning) beyond that is
//! out of scope here.

use std::collections::HashMap;
use std::sync::RwLock;

use salesdesk_catalog::{Product, ProductRepository};
use salesdesk_clients::{Client, ClientRepository};
use salesdesk_core::{
    ClientId, DomainError, DomainResult, Entity, ProductId, ReservationId,
};
use salesdesk_reservations::{Reservation, ReservationRepository};

fn poisoned() -> DomainError {
    DomainError::repository("lock poisoned")
}

/// In-memory reservation store.
#[derive(Debug, Default)]
pub struct InMemoryReservationRepository {
    reservations: RwLock<HashMap<ReservationId, Reservation>>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a reservation directly (bypasses the handler path).
    pub fn insert(&self, reservation: Reservation) -> DomainResult<()> {
        let mut reservations = self.reservations.write().map_err(|_| poisoned())?;
        reservations.insert(reservation.id().clone(), reservation);
        Ok(())
    }
}

impl ReservationRepository for InMemoryReservationRepository {
    fn load(&self, id: &ReservationId) -> DomainResult<Reservation> {
        let reservations = self.reservations.read().map_err(|_| poisoned())?;
        reservations.get(id).cloned().ok_or(DomainError::NotFound)
    }

    fn save(&self, reservation: &Reservation) -> DomainResult<()> {
        let mut reservations = self.reservations.write().map_err(|_| poisoned())?;
        reservations.insert(reservation.id().clone(), reservation.clone());
        Ok(())
    }
}

/// In-memory product catalog.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, product: Product) -> DomainResult<()> {
        let mut products = self.products.write().map_err(|_| poisoned())?;
        products.insert(product.id().clone(), product);
        Ok(())
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn load(&self, id: &ProductId) -> DomainResult<Product> {
        let products = self.products.read().map_err(|_| poisoned())?;
        products.get(id).cloned().ok_or(DomainError::NotFound)
    }
}

/// In-memory client store.
#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<HashMap<ClientId, Client>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, client: Client) -> DomainResult<()> {
        let mut clients = self.clients.write().map_err(|_| poisoned())?;
        clients.insert(client.id().clone(), client);
        Ok(())
    }
}

impl ClientRepository for InMemoryClientRepository {
    fn load(&self, id: &ClientId) -> DomainResult<Client> {
        let clients = self.clients.read().map_err(|_| poisoned())?;
        clients.get(id).cloned().ok_or(DomainError::NotFound)
    }
}
