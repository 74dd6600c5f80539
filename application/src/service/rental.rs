use error_stack::Report;
use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::credit::{CreditChecker, CreditStanding, DependOnCreditChecker};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::notify::{DependOnNotifier, Notifier};
use kernel::interface::query::{DependOnRentalQuery, RentalQuery};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{Customer, Movie, MovieStock, Rental, RentalId, RentedOn};
use kernel::KernelError;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::policy;
use crate::transfer::{ExtendRentalDto, RentMoviesDto, RentalDto};

#[async_trait::async_trait]
pub trait RentMoviesService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnRentalModifier<Connection>
    + DependOnCreditChecker
    + DependOnClock
{
    async fn rent_movies(&self, dto: RentMoviesDto) -> error_stack::Result<RentalDto, KernelError> {
        let RentMoviesDto { customer, movies } = dto;
        let customer = customer
            .map(Customer::from)
            .ok_or_else(|| Report::new(KernelError::CustomerRequired))?;
        let movies = movies
            .filter(|movies| !movies.is_empty())
            .ok_or_else(|| Report::new(KernelError::MovieListRequired))?;

        // Stock wins over any other problem with the list.
        if let Some(movie) = movies
            .iter()
            .find(|movie| !MovieStock::new(movie.stock).is_available())
        {
            return Err(Report::new(KernelError::OutOfStock)
                .attach_printable(format!("Movie `{}` is out of stock", movie.title)));
        }
        let movies = movies
            .into_iter()
            .map(Movie::try_from)
            .collect::<Result<Vec<Movie>, Report<KernelError>>>()?;

        match self.credit_checker().check(&customer).await {
            Ok(CreditStanding::Clear) => {}
            Ok(CreditStanding::Flagged) => return Err(Report::new(KernelError::CustomerBlocked)),
            Err(report) => {
                error!("{report:?}");
                return Err(Report::new(KernelError::CreditCheckUnavailable));
            }
        }

        let rented_on = RentedOn::new(self.clock().today());
        let due_on = policy::due_date(&rented_on)?;
        let value = policy::rental_value(&movies);
        let rental = Rental::new(
            RentalId::new(Uuid::new_v4()),
            customer,
            movies,
            rented_on,
            due_on,
            value,
        )?;
        debug!("Created rental: {rental:?}");

        let mut connection = self.database_connection().transact().await?;
        self.rental_modifier()
            .save(&mut connection, &rental)
            .await?;
        connection.commit().await?;

        Ok(RentalDto::from(rental))
    }
}

impl<Connection: Transaction, T> RentMoviesService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnRentalModifier<Connection>
        + DependOnCreditChecker
        + DependOnClock
{
}

#[async_trait::async_trait]
pub trait ExtendRentalService<Connection: Transaction>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnRentalModifier<Connection>
{
    async fn extend_rental(
        &self,
        dto: ExtendRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        let ExtendRentalDto { rental, days } = dto;
        let mut rental = Rental::try_from(rental)?;

        let due_on = policy::extended_due_date(rental.rented_on(), days)?;
        let value = policy::extended_value(rental.value(), days);
        rental.substitute(|rental| {
            *rental.due_on = due_on;
            *rental.value = value;
        });
        debug!("Extended rental by {days} days: {rental:?}");

        let mut connection = self.database_connection().transact().await?;
        self.rental_modifier()
            .save(&mut connection, &rental)
            .await?;
        connection.commit().await?;

        Ok(RentalDto::from(rental))
    }
}

impl<Connection: Transaction, T> ExtendRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnRentalModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait NotifyOverdueService<Connection: Transaction>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnNotifier
    + DependOnClock
{
    /// Sends one notice per overdue rental. A failed notice does not stop the
    /// batch; the call reports the failures once every rental was visited.
    async fn notify_overdue(&self) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let pending = self.rental_query().fetch_pending(&mut connection).await?;
        connection.roll_back().await?;

        let today = self.clock().today();
        let overdue = pending
            .iter()
            .filter(|rental| rental.is_overdue(&today))
            .collect::<Vec<&Rental>>();

        let mut failed = 0usize;
        for rental in &overdue {
            if let Err(report) = Notifier::notify_overdue(self.notifier(), rental.customer()).await {
                warn!("{report:?}");
                failed += 1;
            }
        }
        info!(
            "Overdue notices sent: {}/{} (pending rentals: {})",
            overdue.len() - failed,
            overdue.len(),
            pending.len()
        );

        if failed > 0 {
            return Err(Report::new(KernelError::NotificationFailed)
                .attach_printable(format!("{failed} of {} notices failed", overdue.len())));
        }
        Ok(())
    }
}

impl<Connection: Transaction, T> NotifyOverdueService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnNotifier
        + DependOnClock
{
}
