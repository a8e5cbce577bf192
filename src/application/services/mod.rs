//! Business logic services for the application layer.

pub mod cookbook_service;

pub use cookbook_service::CookbookService;
