//! A logging link backed by `tracing` (no variables or result payloads are logged).

use futures::StreamExt;

use crate::link::{ApolloLink, LinkLike};
use crate::streaming::empty_stream;

/// Forwarding link that logs each operation, every emission and the terminal
/// event of the stream coming back.
#[derive(Clone, Debug)]
pub struct LoggingLink {
    label: String,
}

impl Default for LoggingLink {
    fn default() -> Self {
        Self::new("logging")
    }
}

impl LoggingLink {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn into_link(self) -> ApolloLink {
        let label = self.label.clone();
        ApolloLink::new(move |operation, forward| {
            let label = label.clone();
            let name = operation.operation_name.clone().unwrap_or_default();
            tracing::debug!(
                target: "apollo_link::link",
                link = %label,
                operation = %name,
                operation_type = ?operation.operation_type,
                forwarded = forward.is_some(),
                "operation started"
            );
            let Some(forward) = forward else {
                return Ok(Some(empty_stream()));
            };
            let mut inner = forward(operation)?;
            let s = async_stream::stream! {
                let mut emitted = 0usize;
                while let Some(item) = inner.next().await {
                    if let Err(e) = &item {
                        tracing::debug!(target: "apollo_link::link", link = %label, operation = %name, err = %e, "operation failed");
                    } else {
                        emitted += 1;
                        tracing::trace!(target: "apollo_link::link", link = %label, operation = %name, emitted, "result received");
                    }
                    let failed = item.is_err();
                    yield item;
                    if failed {
                        return;
                    }
                }
                tracing::debug!(target: "apollo_link::link", link = %label, operation = %name, emitted, "operation complete");
            };
            Ok(Some(Box::pin(s)))
        })
        .with_name(self.label)
    }
}

impl From<LoggingLink> for LinkLike {
    fn from(link: LoggingLink) -> Self {
        LinkLike::Link(link.into_link())
    }
}
