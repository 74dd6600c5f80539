use crate::entity::Customer;
use crate::KernelError;

#[async_trait::async_trait]
pub trait Notifier: 'static + Sync + Send {
    async fn notify_overdue(&self, customer: &Customer) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnNotifier: 'static + Sync + Send {
    type Notifier: Notifier;
    fn notifier(&self) -> &Self::Notifier;
}
