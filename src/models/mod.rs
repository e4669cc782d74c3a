pub mod billing;
pub mod limits;
