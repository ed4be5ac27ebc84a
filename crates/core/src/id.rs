//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque non-empty strings. The surrounding system decides
//! how they are minted; `generate()` exists for callers that need a fresh,
//! time-ordered one.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a reservation (an open order's working set).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

/// Identifier of a product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a client.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

macro_rules! impl_str_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier from an existing string.
            ///
            /// Fails on empty input; identifiers are otherwise opaque.
            pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(DomainError::invalid_id(concat!($name, ": empty")));
                }
                Ok(Self(id))
            }

            /// Mint a fresh identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in
            /// tests for determinism.
            pub fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_str_id!(ReservationId, "ReservationId");
impl_str_id!(ProductId, "ProductId");
impl_str_id!(ClientId, "ClientId");
