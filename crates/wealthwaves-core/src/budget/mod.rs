pub mod allocation;
pub mod categories;
pub mod savings_jar;
pub mod student;
