//! Add-product command handling.

use tracing::{debug, warn};

use salesdesk_catalog::{Product, ProductRepository};
use salesdesk_clients::ClientRepository;
use salesdesk_core::{DomainResult, Entity};
use salesdesk_reservations::{Reservation, ReservationRepository, SuggestionService};

use crate::command::AddProductCommand;

/// Decides which product (requested or an equivalent) is added to a
/// reservation, and persists the result.
///
/// Per invocation: one reservation load, one product load, at most one
/// suggestion lookup (only when the product is unavailable), one save.
/// Repository failures propagate unmodified; nothing is mutated if a load
/// fails. The operation is not transactional across repositories - a save
/// failure after a successful suggestion lookup is surfaced to the caller.
#[derive(Debug, Clone)]
pub struct AddProductHandler<R, P, C, S> {
    reservations: R,
    products: P,
    clients: C,
    suggestions: S,
}

impl<R, P, C, S> AddProductHandler<R, P, C, S>
where
    R: ReservationRepository,
    P: ProductRepository,
    C: ClientRepository,
    S: SuggestionService,
{
    pub fn new(reservations: R, products: P, clients: C, suggestions: S) -> Self {
        Self {
            reservations,
            products,
            clients,
            suggestions,
        }
    }

    pub fn handle(&self, command: &AddProductCommand) -> DomainResult<()> {
        let mut reservation = self.reservations.load(command.order_id())?;
        let product = self.products.load(command.product_id())?;

        let selected = if product.is_available() {
            product
        } else {
            self.substitute(product, &reservation)?
        };

        reservation.add_line(selected.snapshot(), command.quantity())?;

        if let Err(err) = self.reservations.save(&reservation) {
            warn!(order_id = %command.order_id(), error = %err, "reservation save failed");
            return Err(err);
        }

        Ok(())
    }

    /// Ask for an equivalent, keyed on the product and the client owning
    /// the order. Best-effort: whatever comes back is recorded, the line is
    /// never silently dropped.
    fn substitute(&self, product: Product, reservation: &Reservation) -> DomainResult<Product> {
        let client = self.clients.load(reservation.client().id())?;
        let equivalent = self.suggestions.suggest_equivalent(&product, &client);
        debug!(
            requested = %product.id(),
            suggested = %equivalent.id(),
            "substituted unavailable product"
        );
        Ok(equivalent)
    }
}
