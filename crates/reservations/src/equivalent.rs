//! Equivalent-product suggestion contract.

use salesdesk_catalog::Product;
use salesdesk_clients::Client;

/// Collaborator contract: suggest a substitute when a product is unavailable.
///
/// Best-effort by design: the service may return a genuine equivalent, a
/// stand-in, or the requested product itself, but it always returns some
/// usable product. A missing suggestion is not an error.
pub trait SuggestionService {
    fn suggest_equivalent(&self, product: &Product, client: &Client) -> Product;
}

impl<T: SuggestionService + ?Sized> SuggestionService for &T {
    fn suggest_equivalent(&self, product: &Product, client: &Client) -> Product {
        (**self).suggest_equivalent(product, client)
    }
}
