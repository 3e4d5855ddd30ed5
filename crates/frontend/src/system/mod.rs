pub mod admin;
pub mod audit;
pub mod notifications;
pub mod pages;
