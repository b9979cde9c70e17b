mod credit;

pub use credit::{CreateCreditRequest, Credit, CreditListItem, CreditResponse, CreditStatus};
