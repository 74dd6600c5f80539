use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
