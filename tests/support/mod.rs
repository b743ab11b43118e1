//! Shared link fixtures for integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use apollo_link::prelude::*;
use futures::StreamExt;
use serde_json::{Value, json};

/// Append `value` to the JSON array stored under `key` in the operation's context.
pub fn push_context(op: &Operation, key: &str, value: Value) {
    op.context().update(|ctx| {
        let entry = ctx.entry(key.to_string()).or_insert_with(|| json!([]));
        if let Some(items) = entry.as_array_mut() {
            items.push(value);
        }
    });
}

/// Forwarding link that records `tag` in the context trail and stamps every
/// result coming back with it. With `short_circuit` it answers on its own.
pub fn tagging_link(tag: u8, short_circuit: bool) -> ApolloLink {
    ApolloLink::new(move |op, forward| {
        push_context(&op, "trail", json!(tag));
        if short_circuit {
            return Ok(Some(of([FetchResult::data(json!({ "short": tag }))])));
        }
        let Some(forward) = forward else {
            return Ok(None);
        };
        Ok(Some(forward(op)?.map_results(move |mut result| {
            let ext = result.extensions.get_or_insert_with(Default::default);
            let seen = ext
                .entry("seen_by".to_string())
                .or_insert_with(|| json!([]));
            if let Some(items) = seen.as_array_mut() {
                items.push(json!(tag));
            }
            result
        })))
    })
    .with_name(format!("tag-{tag}"))
}

/// Terminating link answering with the context trail it observed.
pub fn trail_terminal() -> ApolloLink {
    ApolloLink::terminating(|op| {
        let trail = op.context().get("trail").unwrap_or_else(|| json!([]));
        Ok(Some(of([FetchResult::data(json!({ "trail": trail }))])))
    })
    .with_name("terminal")
}

/// Terminating link answering with `value`, counting its invocations.
pub fn counting_terminal(value: Value, calls: Arc<Mutex<usize>>) -> ApolloLink {
    ApolloLink::terminating(move |_| {
        *calls.lock().unwrap() += 1;
        Ok(Some(of([FetchResult::data(value.clone())])))
    })
}

pub async fn collect(stream: ResultStream) -> Vec<Result<FetchResult, LinkError>> {
    stream.collect().await
}

/// Sets its flag when dropped.
pub struct DropFlag(pub Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Next(FetchResult),
    Error(LinkError),
    Complete,
}

/// Observer that appends every event to a shared log.
pub fn recording_observer() -> (Arc<Mutex<Vec<Event>>>, impl Observer) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let (a, b, c) = (log.clone(), log.clone(), log.clone());
    let obs = observer(
        move |r| a.lock().unwrap().push(Event::Next(r)),
        move |e| b.lock().unwrap().push(Event::Error(e)),
        move || c.lock().unwrap().push(Event::Complete),
    );
    (log, obs)
}
