//! Application layer services implementing business logic.
//!
//! This layer owns the shared cookbook, serializes access to it, and logs
//! the outcome of every mutation. HTTP handlers talk to it exclusively.
//!
//! # Available Services
//!
//! - [`services::cookbook_service::CookbookService`] - Entry creation, lookup and recipe summaries

pub mod services;
