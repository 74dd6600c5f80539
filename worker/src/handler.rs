use driver::clock::SystemClock;
use driver::config::DriverConfig;
use driver::credit::BlocklistCreditChecker;
use driver::database::{InMemoryDatabase, InMemoryRentalRepository, InMemoryTransaction};
use driver::error::ConvertError;
use driver::notify::LogNotifier;
use kernel::interface::clock::DependOnClock;
use kernel::interface::credit::DependOnCreditChecker;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::notify::DependOnNotifier;
use kernel::interface::query::DependOnRentalQuery;
use kernel::interface::update::DependOnRentalModifier;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    database: InMemoryDatabase,
    credit_checker: BlocklistCreditChecker,
    notifier: LogNotifier,
    clock: SystemClock,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let config = DriverConfig::from_env().convert_error()?;
        Self::with_config(&config).await
    }

    pub async fn with_config(config: &DriverConfig) -> error_stack::Result<Self, KernelError> {
        let database = InMemoryDatabase::from_config(config).await?;

        Ok(Self {
            database,
            credit_checker: BlocklistCreditChecker::from_config(config),
            notifier: LogNotifier,
            clock: SystemClock::from_config(config),
        })
    }
}

impl DependOnDatabaseConnection<InMemoryTransaction> for Handler {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        &self.database
    }
}

impl DependOnRentalQuery<InMemoryTransaction> for Handler {
    type RentalQuery = InMemoryRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &InMemoryRentalRepository
    }
}

impl DependOnRentalModifier<InMemoryTransaction> for Handler {
    type RentalModifier = InMemoryRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &InMemoryRentalRepository
    }
}

impl DependOnCreditChecker for Handler {
    type CreditChecker = BlocklistCreditChecker;
    fn credit_checker(&self) -> &Self::CreditChecker {
        &self.credit_checker
    }
}

impl DependOnNotifier for Handler {
    type Notifier = LogNotifier;
    fn notifier(&self) -> &Self::Notifier {
        &self.notifier
    }
}

impl DependOnClock for Handler {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

#[cfg(test)]
mod test {
    use std::num::NonZeroU32;

    use application::service::{ExtendRentalService, NotifyOverdueService, RentMoviesService};
    use application::transfer::{CustomerDto, ExtendRentalDto, MovieDto, RentMoviesDto};
    use driver::config::DriverConfig;
    use kernel::KernelError;
    use rust_decimal_macros::dec;
    use time::UtcOffset;
    use uuid::Uuid;

    use crate::handler::Handler;

    fn request(name: &str) -> RentMoviesDto {
        RentMoviesDto {
            customer: Some(CustomerDto {
                id: Uuid::new_v4(),
                name: name.to_string(),
            }),
            movies: Some(vec![MovieDto {
                title: "Heat".to_string(),
                stock: 1,
                price: dec!(4.0),
            }]),
        }
    }

    #[tokio::test]
    async fn rent_extend_and_notify() -> error_stack::Result<(), KernelError> {
        let config = DriverConfig::new(None, vec!["Mallory".to_string()], None, UtcOffset::UTC);
        let handler = Handler::with_config(&config).await?;

        let rental = handler.rent_movies(request("Alice")).await?;
        assert_eq!(rental.value, dec!(4.0));

        let days = NonZeroU32::new(3).ok_or(KernelError::Internal)?;
        let extended = handler
            .extend_rental(ExtendRentalDto { rental, days })
            .await?;
        assert_eq!(extended.value, dec!(12.0));

        let blocked = handler.rent_movies(request("Mallory")).await.unwrap_err();
        assert_eq!(blocked.current_context(), &KernelError::CustomerBlocked);

        handler.notify_overdue().await?;
        Ok(())
    }
}
