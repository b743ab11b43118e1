//! Ready-made links built on the composition primitives.

pub mod afterware;
pub mod logging;

pub use afterware::afterware;
pub use logging::LoggingLink;
