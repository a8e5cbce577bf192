//! Utility functions shared by the API and the admin CLI.
//!
//! - [`name_normalizer`] - Canonical recipe names from free-form input

pub mod name_normalizer;
