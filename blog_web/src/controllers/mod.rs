pub mod api;
pub mod blog;
pub mod dashboard;
pub mod login;
