pub mod age;
pub mod contact;
pub mod countries;
pub mod credentials;
pub mod signup;
