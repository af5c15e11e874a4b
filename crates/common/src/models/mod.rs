pub mod exam;
pub mod finance;
pub mod pagination;
pub mod question;
pub mod user;
