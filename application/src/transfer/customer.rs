use kernel::prelude::entity::{Customer, CustomerId, CustomerName, DestructCustomer};
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CustomerDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Customer> for CustomerDto {
    fn from(value: Customer) -> Self {
        let DestructCustomer { id, name } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<CustomerDto> for Customer {
    fn from(value: CustomerDto) -> Self {
        Customer::new(CustomerId::new(value.id), CustomerName::new(value.name))
    }
}
