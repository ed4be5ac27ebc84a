use serde::{Deserialize, Serialize};

use salesdesk_core::{ClientId, DomainResult, Entity, ValueObject};

/// Entity: Client.
///
/// Owned by a repository external to this core; borrowed for the duration of
/// one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    name: String,
}

impl Client {
    pub fn new(id: ClientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Immutable snapshot carried by reservations and invoice requests.
    pub fn snapshot(&self) -> ClientData {
        ClientData {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Published-language snapshot of a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientData {
    id: ClientId,
    name: String,
}

impl ClientData {
    pub fn new(id: ClientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> &ClientId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for ClientData {}

/// Collaborator contract: client lookup.
///
/// Implemented by the surrounding system; lookup failures surface as
/// `DomainError::NotFound` / `DomainError::Repository` unchanged.
pub trait ClientRepository {
    fn load(&self, id: &ClientId) -> DomainResult<Client>;
}

impl<T: ClientRepository + ?Sized> ClientRepository for &T {
    fn load(&self, id: &ClientId) -> DomainResult<Client> {
        (**self).load(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_carries_identity_and_name() {
        let id = ClientId::new("1").unwrap();
        let client = Client::new(id.clone(), "client");

        let data = client.snapshot();
        assert_eq!(data.id(), &id);
        assert_eq!(data.name(), "client");
    }

    #[test]
    fn snapshots_compare_by_value() {
        let id = ClientId::new("1").unwrap();
        let a = Client::new(id.clone(), "client").snapshot();
        let b = ClientData::new(id, "client");
        assert_eq!(a, b);
    }
}
