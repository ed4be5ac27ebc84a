//! Product catalog domain module.
//!
//! This crate contains the product entity, its classification used for tax
//! rate selection, and the published-language snapshot carried by
//! reservation lines and invoice requests. Pure domain logic, no IO.

pub mod product;

pub use product::{Product, ProductData, ProductRepository, ProductStatus, ProductType};
