pub mod budget;
pub mod business;
pub mod goals;
pub mod loans;
pub mod savings;
pub mod validation;
