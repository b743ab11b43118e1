//! Links and their composition algebra.
//!
//! A link is one unit of request handling. Each link is tagged at
//! construction as terminating (it produces the result itself) or
//! forwarding (it may delegate to the rest of the chain through a
//! [`NextLink`]). Links are combined with [`concat`], [`split`] and [`fold`].

pub mod apollo_link;
pub mod compose;
pub mod handler;
pub mod presets;

pub use apollo_link::{ApolloLink, LinkLike};
pub use compose::{
    Composed, concat, concat_with_diagnostic, empty, fold, from_links, passthrough, split,
    split_or_forward, try_concat,
};
pub use handler::{ForwardingFn, LinkKind, LinkResult, NextLink, RequestHandler, TerminatingFn, next_link};
pub use presets::{LoggingLink, afterware};
