pub mod credit_repository;

pub use credit_repository::{CreditRepository, MySqlCreditRepository};
