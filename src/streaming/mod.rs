//! Streaming Module
//!
//! The result stream returned by every link, plus:
//! - Constructors (`of`, `empty_stream`, `from_error`, `from_future`)
//! - Adapters for links that transform forwarded results
//! - Callback-style subscription with cancellation

pub mod adapters;
mod factory;
mod subscription;
mod types;

pub use adapters::*;
pub use factory::*;
pub use subscription::*;
pub use types::*;
