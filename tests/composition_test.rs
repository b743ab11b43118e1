//! Composition behavior across `empty`, `concat`, `split` and `fold`.

mod support;

use std::sync::{Arc, Mutex};

use apollo_link::link::try_concat;
use apollo_link::prelude::*;
use futures::StreamExt;
use proptest::prelude::*;
use serde_json::{Value, json};
use tracing_test::traced_test;

use support::{collect, counting_terminal, tagging_link, trail_terminal};

fn data_of(items: &[Result<FetchResult, LinkError>]) -> Vec<Option<Value>> {
    items
        .iter()
        .map(|item| item.as_ref().ok().and_then(|r| r.data.clone()))
        .collect()
}

#[tokio::test]
async fn empty_link_completes_without_emitting() {
    let link = empty();
    assert!(link.is_terminating());
    let out = execute(&link, &GraphQLRequest::new("{ a }")).unwrap();
    assert!(collect(out).await.is_empty());

    let folded = ApolloLink::from_links(Vec::<ApolloLink>::new());
    assert!(folded.is_terminating());
    let out = folded.request(Operation::new("{ a }"), None).unwrap().unwrap();
    assert_eq!(out.count().await, 0);
}

fn emissions(link: &ApolloLink) -> usize {
    let stream = link
        .request(Operation::new("{ a }"), None)
        .unwrap()
        .unwrap_or_else(empty_stream);
    futures::executor::block_on(collect(stream)).len()
}

#[traced_test]
#[test]
fn empty_concatenated_with_anything_emits_nothing() {
    let answering = ApolloLink::terminating(|_| Ok(Some(of([FetchResult::data(json!("x"))]))));
    let forwarding = tagging_link(1, false);

    for other in [answering, forwarding.clone()] {
        let link = concat(empty(), other);
        assert!(link.is_terminating());
        assert_eq!(link.name(), Some("empty"));
        assert_eq!(emissions(&link), 0);
    }

    for other in [forwarding, passthrough()] {
        let link = concat(other, empty());
        assert!(link.is_terminating());
        assert_eq!(emissions(&link), 0);
    }

    logs_assert(|lines: &[&str]| {
        let warnings = lines
            .iter()
            .filter(|line| line.contains("terminating link (empty), which will have no effect"))
            .count();
        match warnings {
            2 => Ok(()),
            n => Err(format!("expected one warning per concat after empty, got {n}")),
        }
    });
}

#[tokio::test]
async fn context_written_upstream_is_visible_downstream() {
    let writer = ApolloLink::new(|op, forward| {
        op.context().insert("seen", true);
        forward.map(|f| f(op)).transpose()
    });
    let reader = ApolloLink::terminating(|op| {
        Ok(Some(of([FetchResult::data(json!({
            "seen": op.context().get("seen"),
        }))])))
    });

    let link = writer.concat(&reader);
    let out = execute(&link, &GraphQLRequest::new("{ a }")).unwrap();
    let first = first_result(out).await.unwrap().unwrap();
    assert_eq!(first.data, Some(json!({ "seen": true })));
}

#[tokio::test]
async fn requests_flow_down_and_results_flow_back_up() {
    let link = from_links([tagging_link(1, false), tagging_link(2, false), trail_terminal()]);
    assert!(link.is_terminating());

    let op = Operation::new("{ a }");
    let out = link.request(op.clone(), None).unwrap().unwrap();
    let items = collect(out).await;

    assert_eq!(items.len(), 1);
    let result = items[0].as_ref().unwrap();
    assert_eq!(result.data, Some(json!({ "trail": [1, 2] })));
    assert_eq!(result.extensions.as_ref().unwrap()["seen_by"], json!([2, 1]));
    assert_eq!(op.context().get("trail"), Some(json!([1, 2])));
}

#[tokio::test]
async fn short_circuit_skips_the_rest_of_the_chain() {
    let calls = Arc::new(Mutex::new(0));
    let link = from_links([
        tagging_link(1, false),
        tagging_link(2, true),
        counting_terminal(json!("terminal"), calls.clone()),
    ]);

    let out = execute(&link, &GraphQLRequest::new("{ a }")).unwrap();
    let items = collect(out).await;

    assert_eq!(data_of(&items), vec![Some(json!({ "short": 2 }))]);
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[traced_test]
#[test]
fn concat_after_terminating_link_is_a_no_op_with_one_warning() {
    let terminal = ApolloLink::terminating(|_| Ok(Some(of([FetchResult::data(json!("t"))]))))
        .with_name("http");
    let never = ApolloLink::terminating(|_| panic!("must not be reached"));

    let link = terminal.concat(&never);

    assert!(link.is_terminating());
    assert_eq!(link.name(), Some("http"));
    let out = futures::executor::block_on(collect(
        link.request(Operation::new("{ a }"), None).unwrap().unwrap(),
    ));
    assert_eq!(data_of(&out), vec![Some(json!("t"))]);

    logs_assert(|lines: &[&str]| {
        let warnings = lines
            .iter()
            .filter(|line| line.contains("which will have no effect"))
            .count();
        match warnings {
            1 => Ok(()),
            n => Err(format!("expected exactly one warning, got {n}")),
        }
    });
    assert!(logs_contain("http"));
}

#[test]
fn try_concat_reports_the_terminating_link() {
    let terminal = ApolloLink::terminating(|_| Ok(None)).with_name("http");
    let err = try_concat(&terminal, passthrough()).unwrap_err();
    assert_eq!(
        err,
        LinkError::TerminatingConcat {
            link: "http".to_string()
        }
    );
    assert!(err.to_string().contains("which will have no effect"));
}

#[tokio::test]
async fn split_invokes_only_the_chosen_side() {
    let left_calls = Arc::new(Mutex::new(0));
    let right_calls = Arc::new(Mutex::new(0));
    let link = split(
        |op| op.operation_type == Some(OperationType::Subscription),
        counting_terminal(json!("ws"), left_calls.clone()),
        counting_terminal(json!("http"), right_calls.clone()),
    );
    assert!(link.is_terminating());

    let requests = [
        "subscription OnTick { tick }",
        "query Me { me { id } }",
        "mutation Save { save }",
        "subscription OnTock { tock }",
    ];
    let mut answers = Vec::new();
    for query in requests {
        let out = execute(&link, &GraphQLRequest::new(query)).unwrap();
        answers.extend(data_of(&collect(out).await));
    }

    assert_eq!(
        answers,
        vec![
            Some(json!("ws")),
            Some(json!("http")),
            Some(json!("http")),
            Some(json!("ws")),
        ]
    );
    assert_eq!(*left_calls.lock().unwrap(), 2);
    assert_eq!(*right_calls.lock().unwrap(), 2);
}

#[tokio::test]
async fn split_with_forwarding_side_continues_the_chain() {
    let calls = Arc::new(Mutex::new(0));
    let cached = ApolloLink::terminating(|_| Ok(Some(of([FetchResult::data(json!("cache"))]))));
    let link = passthrough()
        .split_or_forward(|op| op.context().contains_key("cached"), cached)
        .concat(counting_terminal(json!("network"), calls.clone()));
    assert!(link.is_terminating());

    let plain = execute(&link, &GraphQLRequest::new("{ a }")).unwrap();
    assert_eq!(data_of(&collect(plain).await), vec![Some(json!("network"))]);

    let mut context = serde_json::Map::new();
    context.insert("cached".into(), json!(true));
    let hit = execute(&link, &GraphQLRequest::new("{ a }").with_context(context)).unwrap();
    assert_eq!(data_of(&collect(hit).await), vec![Some(json!("cache"))]);

    assert_eq!(*calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn bare_handlers_compose_like_links() {
    let head = LinkLike::handler(|op, forward| {
        op.context().insert("via", "handler");
        forward.map(|f| f(op)).transpose()
    });
    let tail = RequestHandler::terminating(|op| {
        Ok(Some(of([FetchResult::data(op.context().get("via").unwrap_or_default())])))
    });

    let link = concat(head, tail);
    let out = execute(&link, &GraphQLRequest::new("{ a }")).unwrap();
    assert_eq!(data_of(&collect(out).await), vec![Some(json!("handler"))]);
}

#[tokio::test]
async fn absent_results_are_replaced_by_empty_streams() {
    let silent = ApolloLink::new(|_, _| Ok(None));
    let link = silent.concat(counting_terminal(json!(1), Arc::new(Mutex::new(0))));
    let out = link.request(Operation::new("{ a }"), None).unwrap().unwrap();
    assert_eq!(out.count().await, 0);
}

fn nested_concat(mut links: Vec<ApolloLink>) -> ApolloLink {
    let Some(last) = links.pop() else {
        return empty();
    };
    links
        .into_iter()
        .rev()
        .fold(last, |tail, link| concat(link, tail))
}

fn chain_for(flags: &[bool], terminal: bool) -> Vec<ApolloLink> {
    let mut links: Vec<ApolloLink> = flags
        .iter()
        .enumerate()
        .map(|(i, short)| tagging_link(i as u8, *short))
        .collect();
    if terminal {
        links.push(trail_terminal());
    }
    links
}

fn run(link: &ApolloLink) -> (Vec<Result<FetchResult, LinkError>>, Option<Value>) {
    let op = Operation::new("{ a }");
    let stream = link
        .request(op.clone(), None)
        .unwrap()
        .unwrap_or_else(empty_stream);
    let items = futures::executor::block_on(collect(stream));
    (items, op.context().get("trail"))
}

proptest! {
    #[test]
    fn fold_matches_nested_concat(
        flags in proptest::collection::vec(any::<bool>(), 0..6),
        terminal in any::<bool>(),
    ) {
        let folded = fold(chain_for(&flags, terminal));
        let nested = nested_concat(chain_for(&flags, terminal));

        prop_assert_eq!(folded.kind(), nested.kind());
        prop_assert_eq!(run(&folded), run(&nested));
    }
}
