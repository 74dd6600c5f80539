use error_stack::Context;

use crate::entity::Customer;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CreditStanding {
    Clear,
    /*
     * The customer has unresolved debt and must not rent
     */
    Flagged,
}

/// Negative-credit lookup. A failing lookup is reported through `Self::Error`,
/// which callers must not forward to their own callers.
#[async_trait::async_trait]
pub trait CreditChecker: 'static + Sync + Send {
    type Error: Context;
    async fn check(&self, customer: &Customer) -> error_stack::Result<CreditStanding, Self::Error>;
}

pub trait DependOnCreditChecker: 'static + Sync + Send {
    type CreditChecker: CreditChecker;
    fn credit_checker(&self) -> &Self::CreditChecker;
}
