pub mod mock;
pub mod models;
pub mod provider;
