pub mod cloud;
pub mod country;
pub mod payment;
pub mod stripe;
