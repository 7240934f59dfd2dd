pub mod amortization;
pub mod catalog;
pub mod offers;
