//! Error Handling Module
//!
//! This module provides error handling for the link pipeline, including:
//! - Core error type (`LinkError`) and its `ErrorCategory`
//! - Classification helpers separating programmer errors from runtime failures
//!
//! # Example
//!
//! ```rust,ignore
//! use apollo_link::error::{ErrorCategory, LinkError};
//!
//! let error = LinkError::invalid_operation("query is required");
//! assert_eq!(error.category(), ErrorCategory::Validation);
//! assert!(error.is_programmer_error());
//! ```

pub mod helpers;
pub mod types;

pub use types::*;
