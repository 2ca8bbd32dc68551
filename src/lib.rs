//! Catalog Application Library
//!
//! Resource modules (authors, books, publishers) and the shared service
//! error and response envelope types.

pub mod error;
pub mod modules;
pub mod utils;

pub use modules::register_all;
