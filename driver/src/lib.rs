pub mod clock;
pub mod config;
pub mod credit;
pub mod database;
pub mod error;
pub mod notify;

pub(crate) fn env(key: &str) -> Option<String> {
    dotenvy::var(key).ok().filter(|value| !value.trim().is_empty())
}
