use std::path::PathBuf;

use error_stack::{Report, ResultExt};
use time::UtcOffset;
use vodca::References;

use crate::error::DriverError;
use crate::env;

const RENTAL_STORE_PATH: &str = "RENTAL_STORE_PATH";
const CREDIT_BLOCKLIST: &str = "CREDIT_BLOCKLIST";
const CREDIT_BLOCKLIST_PATH: &str = "CREDIT_BLOCKLIST_PATH";
const RENTAL_UTC_OFFSET: &str = "RENTAL_UTC_OFFSET";

#[derive(Debug, Clone, References)]
pub struct DriverConfig {
    store_path: Option<PathBuf>,
    blocklist: Vec<String>,
    blocklist_path: Option<PathBuf>,
    utc_offset: UtcOffset,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            blocklist: Vec::new(),
            blocklist_path: None,
            utc_offset: UtcOffset::UTC,
        }
    }
}

impl DriverConfig {
    pub fn new(
        store_path: Option<PathBuf>,
        blocklist: Vec<String>,
        blocklist_path: Option<PathBuf>,
        utc_offset: UtcOffset,
    ) -> Self {
        Self {
            store_path,
            blocklist,
            blocklist_path,
            utc_offset,
        }
    }

    /// Reads the process environment, `.env` included. Every key is optional.
    pub fn from_env() -> Result<Self, Report<DriverError>> {
        let utc_offset = match env(RENTAL_UTC_OFFSET) {
            Some(hours) => parse_offset(&hours)?,
            None => UtcOffset::UTC,
        };
        Ok(Self {
            store_path: env(RENTAL_STORE_PATH).map(PathBuf::from),
            blocklist: env(CREDIT_BLOCKLIST)
                .map(|names| parse_names(&names))
                .unwrap_or_default(),
            blocklist_path: env(CREDIT_BLOCKLIST_PATH).map(PathBuf::from),
            utc_offset,
        })
    }
}

pub(crate) fn parse_names(names: &str) -> Vec<String> {
    names
        .split([',', '\n'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn parse_offset(hours: &str) -> Result<UtcOffset, Report<DriverError>> {
    let hours = hours
        .trim()
        .parse::<i8>()
        .change_context_lazy(|| DriverError::Config)
        .attach_printable_lazy(|| format!("{RENTAL_UTC_OFFSET} must be whole hours, got `{hours}`"))?;
    UtcOffset::from_hms(hours, 0, 0)
        .change_context_lazy(|| DriverError::Config)
        .attach_printable_lazy(|| format!("{RENTAL_UTC_OFFSET} out of range: {hours}"))
}
