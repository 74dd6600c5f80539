use crate::database::Transaction;
use crate::entity::Rental;
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalQuery<Connection: Transaction>: Sync + Send + 'static {
    /// Every rental that has not been returned yet, overdue or not.
    async fn fetch_pending(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<Rental>, KernelError>;
}

pub trait DependOnRentalQuery<Connection: Transaction>: Sync + Send + 'static {
    type RentalQuery: RentalQuery<Connection>;
    fn rental_query(&self) -> &Self::RentalQuery;
}
