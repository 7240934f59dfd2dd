pub mod ppf;
