//! Client data as exchanged with other bounded contexts.

use serde::{Deserialize, Serialize};

use crate::id::Id;
use crate::value_object::ValueObject;

/// Snapshot of a client's identity used when issuing documents for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientData {
    id: Id,
    name: String,
}

impl ClientData {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for ClientData {}
