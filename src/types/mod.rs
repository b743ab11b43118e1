//! Data model: raw requests, normalized operations, context and results.

pub mod context;
pub mod operation;
pub mod request;
pub mod result;

pub use context::Context;
pub use operation::{Operation, OperationType};
pub use request::{GraphQLRequest, OPERATION_FIELDS};
pub use result::{ErrorLocation, FetchResult, GraphQLError};
