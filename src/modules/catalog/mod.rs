// Catalog module - boundary contract with the external menu service

pub mod models;

pub use models::MenuItem;
