//! Utility modules for apollo-link
//!
//! This module contains utility functions and types used throughout the library.

pub mod cancel;

pub use cancel::{CancelHandle, make_cancellable_stream, new_cancel_handle};
