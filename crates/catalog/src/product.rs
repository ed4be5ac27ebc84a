use serde::{Deserialize, Serialize};

use salesdesk_core::{DomainResult, Entity, Money, ProductId, ValueObject};

/// Product classification used to select a tax rate.
///
/// Total equality/ordering keeps policy lookups stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Standard,
    Food,
    Drug,
}

/// Product availability lifecycle.
///
/// A product leaves `Available` when it is discontinued or runs out of
/// stock; either way it can no longer be reserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Available,
    OutOfStock,
    Discontinued,
}

/// Entity: Product.
///
/// Owned by the product catalog external to this core; availability may
/// change over the product's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    price: Money,
    name: String,
    product_type: ProductType,
    status: ProductStatus,
}

impl Product {
    pub fn new(
        id: ProductId,
        price: Money,
        name: impl Into<String>,
        product_type: ProductType,
    ) -> Self {
        Self {
            id,
            price,
            name: name.into(),
            product_type,
            status: ProductStatus::Available,
        }
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Available
    }

    pub fn mark_out_of_stock(&mut self) {
        self.status = ProductStatus::OutOfStock;
    }

    pub fn discontinue(&mut self) {
        self.status = ProductStatus::Discontinued;
    }

    /// Immutable snapshot carried by reservation lines and request items.
    pub fn snapshot(&self) -> ProductData {
        ProductData {
            id: self.id.clone(),
            price: self.price,
            name: self.name.clone(),
            product_type: self.product_type,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Published-language snapshot of a product at a point in time.
///
/// Availability is deliberately absent: a snapshot records what was
/// reserved or requested, not the catalog's current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    id: ProductId,
    price: Money,
    name: String,
    product_type: ProductType,
}

impl ProductData {
    pub fn new(
        id: ProductId,
        price: Money,
        name: impl Into<String>,
        product_type: ProductType,
    ) -> Self {
        Self {
            id,
            price,
            name: name.into(),
            product_type,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }
}

impl ValueObject for ProductData {}

/// Collaborator contract: product lookup.
pub trait ProductRepository {
    fn load(&self, id: &ProductId) -> DomainResult<Product>;
}

impl<T: ProductRepository + ?Sized> ProductRepository for &T {
    fn load(&self, id: &ProductId) -> DomainResult<Product> {
        (**self).load(id)
    }
}
