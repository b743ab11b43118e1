//! # apollo-link - composable request pipelines
//!
//! A request runs through a chain of links. Each link either produces the
//! result itself (terminating) or delegates to the rest of the chain through
//! a forwarding function, optionally observing what comes back. Results are
//! lazy, cancellable streams of [`FetchResult`](types::FetchResult)s.
#![deny(unsafe_code)]

//! ## Features
//!
//! - **Composition Algebra**: `concat`, `split`, `fold` and `empty` build new links out of existing ones.
//! - **Explicit Termination**: every link is tagged terminating or forwarding when it is built.
//! - **Shared Context**: a per-operation scratch map threaded through the whole chain.
//! - **Cancellation**: dropping or cancelling a result stream tears down all delegated work.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use apollo_link::prelude::*;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = ApolloLink::new(|op, forward| {
//!         op.context().insert("token", "secret");
//!         forward.map(|f| f(op)).transpose()
//!     });
//!     let terminal = ApolloLink::terminating(|op| {
//!         let token = op.context().get("token");
//!         Ok(Some(of([FetchResult::data(serde_json::json!({ "token": token }))])))
//!     });
//!
//!     let link = ApolloLink::from_links([auth, terminal]);
//!     let mut results = execute(&link, &GraphQLRequest::new("query Me { me { id } }"))?;
//!     while let Some(result) = results.next().await {
//!         println!("{:?}", result?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod executor;
pub mod link;
pub mod streaming;
pub mod telemetry;
pub mod types;
pub mod utils;

pub use error::LinkError;
pub use executor::{Executor, ExecutorConfig, execute};
pub use link::{ApolloLink, LinkKind, LinkLike, NextLink, RequestHandler};

/// Commonly used items.
pub mod prelude {
    pub use crate::error::LinkError;
    pub use crate::executor::{Executor, ExecutorConfig, execute};
    pub use crate::link::{
        ApolloLink, LinkKind, LinkLike, LinkResult, LoggingLink, NextLink, RequestHandler,
        afterware, concat, empty, fold, from_links, next_link, passthrough, split,
        split_or_forward,
    };
    pub use crate::streaming::{
        Observer, ResultStream, ResultStreamExt, Subscription, empty_stream, first_result,
        from_error, from_future, observer, of, subscribe,
    };
    pub use crate::types::{
        Context, FetchResult, GraphQLError, GraphQLRequest, Operation, OperationType,
    };
}
