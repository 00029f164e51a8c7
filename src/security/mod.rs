//! Security Module
//!
//! - Request Validation
//! - Security Headers

pub mod middleware;
pub mod validation;

pub use validation::{RequestValidator, ValidationError};
