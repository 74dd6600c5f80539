mod id;
mod name;

pub use self::{id::*, name::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
}

impl Customer {
    pub fn new(id: CustomerId, name: CustomerName) -> Self {
        Self { id, name }
    }
}
