use kernel::interface::notify::Notifier;
use kernel::prelude::entity::Customer;
use kernel::KernelError;
use tracing::info;
use uuid::Uuid;

/// Writes every notice to the log instead of delivering it.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify_overdue(&self, customer: &Customer) -> error_stack::Result<(), KernelError> {
        let id: &Uuid = customer.id().as_ref();
        let name: &String = customer.name().as_ref();
        info!("Overdue rental notice sent to {name} ({id})");
        Ok(())
    }
}
