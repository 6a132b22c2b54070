pub mod config;
pub mod keys;
pub mod storage;

#[cfg(feature = "hydrate")]
pub mod dom;
