pub mod policy;
pub mod service;
pub mod transfer;
