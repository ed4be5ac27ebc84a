//! Equivalent-product suggestion adapter.

use std::collections::HashMap;

use tracing::debug;

use salesdesk_catalog::Product;
use salesdesk_clients::Client;
use salesdesk_core::{ClientId, Entity, ProductId};
use salesdesk_reservations::SuggestionService;

/// Substitution index keyed by `(product, client)`, with a product-only
/// fallback tier.
///
/// Lookup order: a substitute registered for this client, then one
/// registered for the product alone, then the requested product itself.
/// Best-effort per the contract: some usable product always comes back, a
/// missing suggestion is not an error.
#[derive(Debug, Default)]
pub struct StaticSuggestionService {
    by_client: HashMap<(ProductId, ClientId), Product>,
    by_product: HashMap<ProductId, Product>,
}

impl StaticSuggestionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a substitute offered to every client.
    pub fn register(&mut self, unavailable: &ProductId, substitute: Product) {
        self.by_product.insert(unavailable.clone(), substitute);
    }

    /// Register a substitute tailored to one client (e.g. from purchase
    /// history); takes precedence over [`register`](Self::register).
    pub fn register_for_client(
        &mut self,
        unavailable: &ProductId,
        client: &ClientId,
        substitute: Product,
    ) {
        self.by_client
            .insert((unavailable.clone(), client.clone()), substitute);
    }
}

impl SuggestionService for StaticSuggestionService {
    fn suggest_equivalent(&self, product: &Product, client: &Client) -> Product {
        if let Some(substitute) = self
            .by_client
            .get(&(product.id().clone(), client.id().clone()))
        {
            return substitute.clone();
        }

        match self.by_product.get(product.id()) {
            Some(substitute) => substitute.clone(),
            None => {
                debug!(
                    product = %product.id(),
                    client = %client.id(),
                    "no substitute registered, returning requested product"
                );
                product.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesdesk_catalog::ProductType;
    use salesdesk_core::Money;

    fn product(id: &str) -> Product {
        Product::new(
            ProductId::new(id).unwrap(),
            Money::from_major(100),
            "product",
            ProductType::Standard,
        )
    }

    fn client(id: &str) -> Client {
        Client::new(ClientId::new(id).unwrap(), "client")
    }

    #[test]
    fn registered_substitute_is_suggested() {
        let mut service = StaticSuggestionService::new();
        let requested = product("1");
        service.register(requested.id(), product("2"));

        let suggested = service.suggest_equivalent(&requested, &client("1"));
        assert_eq!(suggested.id(), &ProductId::new("2").unwrap());
    }

    #[test]
    fn client_specific_substitute_wins_over_the_general_one() {
        let mut service = StaticSuggestionService::new();
        let requested = product("1");
        service.register(requested.id(), product("2"));
        service.register_for_client(
            requested.id(),
            &ClientId::new("1").unwrap(),
            product("3"),
        );

        let for_client_one = service.suggest_equivalent(&requested, &client("1"));
        assert_eq!(for_client_one.id(), &ProductId::new("3").unwrap());

        // Other clients still get the general substitute.
        let for_client_two = service.suggest_equivalent(&requested, &client("2"));
        assert_eq!(for_client_two.id(), &ProductId::new("2").unwrap());
    }

    #[test]
    fn unregistered_product_falls_back_to_itself() {
        let service = StaticSuggestionService::new();
        let requested = product("1");

        let suggested = service.suggest_equivalent(&requested, &client("1"));
        assert_eq!(suggested, requested);
    }
}
