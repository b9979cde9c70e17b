// Customers module
//
// Customers are a precondition for credit creation: they already exist,
// keyed by numeric id, and carry an email and an optional declared income.

pub mod models;
pub mod repositories;

pub use models::Customer;
pub use repositories::{CustomerRepository, MySqlCustomerRepository};
