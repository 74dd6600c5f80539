use std::collections::HashSet;
use std::path::PathBuf;

use error_stack::{Report, ResultExt};
use kernel::interface::credit::{CreditChecker, CreditStanding};
use kernel::prelude::entity::Customer;
use tracing::debug;

use crate::config::{parse_names, DriverConfig};
use crate::error::DriverError;

/// Flags customers by name. Names come from the configuration and, when a
/// blocklist file is configured, from that file, re-read on every check.
pub struct BlocklistCreditChecker {
    names: HashSet<String>,
    path: Option<PathBuf>,
}

impl BlocklistCreditChecker {
    pub fn new(names: impl IntoIterator<Item = String>, path: Option<PathBuf>) -> Self {
        Self {
            names: names.into_iter().collect(),
            path,
        }
    }

    pub fn from_config(config: &DriverConfig) -> Self {
        Self::new(config.blocklist().clone(), config.blocklist_path().clone())
    }

    async fn listed(&self, name: &str) -> Result<bool, Report<DriverError>> {
        if self.names.contains(name) {
            return Ok(true);
        }
        let Some(path) = &self.path else {
            return Ok(false);
        };
        let raw = tokio::fs::read_to_string(path)
            .await
            .change_context_lazy(|| DriverError::Io)
            .attach_printable_lazy(|| format!("Cannot read blocklist {}", path.display()))?;
        Ok(parse_names(&raw).iter().any(|listed| listed == name))
    }
}

#[async_trait::async_trait]
impl CreditChecker for BlocklistCreditChecker {
    type Error = DriverError;

    async fn check(&self, customer: &Customer) -> error_stack::Result<CreditStanding, DriverError> {
        let name: &String = customer.name().as_ref();
        let standing = if self.listed(name).await? {
            CreditStanding::Flagged
        } else {
            CreditStanding::Clear
        };
        debug!("Credit standing of {name}: {standing:?}");
        Ok(standing)
    }
}
