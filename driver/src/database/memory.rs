use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use error_stack::{Report, ResultExt};
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{Rental, RentalId};
use kernel::KernelError;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::DriverConfig;
use crate::error::{ConvertError, DriverError};

type Rentals = HashMap<RentalId, Rental>;

/// Rental store kept in memory. With a snapshot path, the whole store is
/// loaded from that JSON file on open and written back on every commit.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    rentals: Arc<RwLock<Rentals>>,
    snapshot: Option<PathBuf>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(path: impl Into<PathBuf>) -> error_stack::Result<Self, KernelError> {
        let path = path.into();
        let exists = tokio::fs::try_exists(&path)
            .await
            .change_context_lazy(|| DriverError::Io)
            .attach_printable_lazy(|| format!("Cannot access {}", path.display()))
            .convert_error()?;
        let rentals = if exists {
            InMemoryInternal::load(&path).await.convert_error()?
        } else {
            Rentals::new()
        };
        debug!("Loaded {} rentals from {}", rentals.len(), path.display());
        Ok(Self {
            rentals: Arc::new(RwLock::new(rentals)),
            snapshot: Some(path),
        })
    }

    pub async fn from_config(config: &DriverConfig) -> error_stack::Result<Self, KernelError> {
        match config.store_path() {
            Some(path) => Self::open(path).await,
            None => Ok(Self::new()),
        }
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(InMemoryTransaction {
            database: self.clone(),
            staged: Vec::new(),
        })
    }
}

/// Writes are staged here and only reach the shared store on commit.
pub struct InMemoryTransaction {
    database: InMemoryDatabase,
    staged: Vec<Rental>,
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let InMemoryTransaction { database, staged } = self;
        let mut rentals = database.rentals.write().await;
        let mut updated = rentals.clone();
        for rental in staged {
            updated.insert(rental.id().clone(), rental);
        }
        // The shared store only changes once the snapshot is on disk.
        if let Some(path) = &database.snapshot {
            InMemoryInternal::store(path, &updated)
                .await
                .convert_error()?;
        }
        *rentals = updated;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

pub struct InMemoryRentalRepository;

#[async_trait::async_trait]
impl RentalQuery<InMemoryTransaction> for InMemoryRentalRepository {
    /// Returned rentals are not tracked by this store, so every stored rental is pending.
    async fn fetch_pending(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let mut rentals = con.database.rentals.read().await.clone();
        for rental in &con.staged {
            rentals.insert(rental.id().clone(), rental.clone());
        }
        Ok(rentals.into_values().collect())
    }
}

#[async_trait::async_trait]
impl RentalModifier<InMemoryTransaction> for InMemoryRentalRepository {
    async fn save(
        &self,
        con: &mut InMemoryTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        con.staged.retain(|staged| staged.id() != rental.id());
        con.staged.push(rental.clone());
        Ok(())
    }
}

pub(in crate::database) struct InMemoryInternal;

impl InMemoryInternal {
    async fn load(path: &Path) -> Result<Rentals, Report<DriverError>> {
        let raw = tokio::fs::read(path)
            .await
            .change_context_lazy(|| DriverError::Io)
            .attach_printable_lazy(|| format!("Cannot read {}", path.display()))?;
        let rentals: Vec<Rental> = serde_json::from_slice(&raw)
            .change_context_lazy(|| DriverError::Serde)
            .attach_printable_lazy(|| format!("Malformed snapshot {}", path.display()))?;
        Ok(rentals
            .into_iter()
            .map(|rental| (rental.id().clone(), rental))
            .collect())
    }

    async fn store(path: &Path, rentals: &Rentals) -> Result<(), Report<DriverError>> {
        let rentals = rentals.values().collect::<Vec<&Rental>>();
        let raw = serde_json::to_vec_pretty(&rentals).change_context_lazy(|| DriverError::Serde)?;
        tokio::fs::write(path, raw)
            .await
            .change_context_lazy(|| DriverError::Io)
            .attach_printable_lazy(|| format!("Cannot write {}", path.display()))
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::RentalQuery;
    use kernel::interface::update::RentalModifier;
    use kernel::prelude::entity::{
        Customer, CustomerId, CustomerName, DueOn, Movie, MoviePrice, MovieStock, MovieTitle,
        Rental, RentalId, RentalValue, RentedOn,
    };
    use kernel::KernelError;
    use rust_decimal_macros::dec;
    use time::macros::date;
    use uuid::Uuid;

    use crate::database::{InMemoryDatabase, InMemoryRentalRepository};

    fn rental() -> error_stack::Result<Rental, KernelError> {
        Rental::new(
            RentalId::new(Uuid::new_v4()),
            Customer::new(CustomerId::new(Uuid::new_v4()), CustomerName::new("Alice")),
            vec![Movie::new(
                MovieTitle::new("Heat"),
                MovieStock::new(2u32),
                MoviePrice::new(dec!(4.0))?,
            )],
            RentedOn::new(date!(2021 - 11 - 15)),
            DueOn::new(date!(2021 - 11 - 16)),
            RentalValue::new(dec!(4.0)),
        )
    }

    #[tokio::test]
    async fn committed_rentals_are_pending() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let rental = rental()?;

        let mut con = db.transact().await?;
        InMemoryRentalRepository.save(&mut con, &rental).await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let pending = InMemoryRentalRepository.fetch_pending(&mut con).await?;
        assert_eq!(pending, vec![rental]);
        Ok(())
    }

    #[tokio::test]
    async fn roll_back_discards_staged() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();

        let mut con = db.transact().await?;
        InMemoryRentalRepository.save(&mut con, &rental()?).await?;
        assert_eq!(InMemoryRentalRepository.fetch_pending(&mut con).await?.len(), 1);
        con.roll_back().await?;

        let mut con = db.transact().await?;
        assert!(InMemoryRentalRepository.fetch_pending(&mut con).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn save_replaces_same_id() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut rental = rental()?;

        let mut con = db.transact().await?;
        InMemoryRentalRepository.save(&mut con, &rental).await?;
        con.commit().await?;

        rental.substitute(|rental| {
            *rental.due_on = DueOn::new(date!(2021 - 11 - 18));
            *rental.value = RentalValue::new(dec!(12.0));
        });
        let mut con = db.transact().await?;
        InMemoryRentalRepository.save(&mut con, &rental).await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let pending = InMemoryRentalRepository.fetch_pending(&mut con).await?;
        assert_eq!(pending, vec![rental]);
        Ok(())
    }

    #[tokio::test]
    async fn snapshot_survives_reopen() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().map_err(|_| KernelError::Internal)?;
        let path = dir.path().join("rentals.json");
        let rental = rental()?;

        let db = InMemoryDatabase::open(&path).await?;
        let mut con = db.transact().await?;
        InMemoryRentalRepository.save(&mut con, &rental).await?;
        con.commit().await?;

        let reopened = InMemoryDatabase::open(&path).await?;
        let mut con = reopened.transact().await?;
        let pending = InMemoryRentalRepository.fetch_pending(&mut con).await?;
        assert_eq!(pending, vec![rental]);
        Ok(())
    }

    #[tokio::test]
    async fn failed_snapshot_write_keeps_store_unchanged() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().map_err(|_| KernelError::Internal)?;
        let path = dir.path().join("rentals.json");

        let db = InMemoryDatabase::open(&path).await?;
        tokio::fs::create_dir(&path)
            .await
            .map_err(|_| KernelError::Internal)?;

        let mut con = db.transact().await?;
        InMemoryRentalRepository.save(&mut con, &rental()?).await?;
        let report = con.commit().await.unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Internal);

        let mut con = db.transact().await?;
        assert!(InMemoryRentalRepository.fetch_pending(&mut con).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_snapshot_is_internal_error() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().map_err(|_| KernelError::Internal)?;
        let path = dir.path().join("rentals.json");
        tokio::fs::write(&path, b"not json")
            .await
            .map_err(|_| KernelError::Internal)?;

        let report = InMemoryDatabase::open(&path).await.err();
        assert_eq!(
            report.as_ref().map(|report| report.current_context()),
            Some(&KernelError::Internal)
        );
        Ok(())
    }
}
