//! Utility functions for code generation, input validation, and request handling.
//!
//! - [`code_generator`] - Short code generation and format validation
//! - [`url_validator`] - Long URL acceptance rules
//! - [`client_ip`] - Client IP resolution from proxy headers
//! - [`db_error`] - PostgreSQL error classification

pub mod client_ip;
pub mod code_generator;
pub mod db_error;
pub mod url_validator;
