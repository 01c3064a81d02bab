mod common;

use std::error::Error;
use std::io;
use std::sync::Arc;

use common::{as_dyn, eof, init_tracing, same_node};
use operr::{DetailedError, Report, as_detailed, chain, root, root_of};
use operr_test_utils::builders::ChainBuilder;
use operr_test_utils::fake_errors::{Link, Wrapped, link_cycle};

#[test]
fn root_of_none_is_none() {
    assert!(root(None).is_none());
}

#[test]
fn root_of_foreign_chain() {
    let leaf: operr::Cause = Arc::new(io::Error::other("Contacted station not found"));
    let wrapped = Wrapped::shared("database failure", leaf.clone());
    let top = DetailedError::new("facade.NewQso")
        .with_cause(wrapped)
        .with_message("Failed to create QSO");

    assert!(same_node(root_of(&top), as_dyn(&leaf)));
    assert!(same_node(root_of(as_dyn(&leaf)), as_dyn(&leaf)));

    let top_dyn: &(dyn Error + 'static) = &top;
    let resolved = root(Some(top_dyn)).expect("some root");
    assert!(same_node(resolved, as_dyn(&leaf)));
}

#[test]
fn root_of_detailed_chain() {
    let leaf = Arc::new(
        DetailedError::new("database.Service.sqliteFetchContactedStationByCallsign")
            .with_message("Contacted station not found"),
    );
    let mid = DetailedError::new("facade.NewQso.mid").with_shared_cause(leaf.clone());
    let top = DetailedError::new("facade.NewQso").with_cause(mid);

    let got = root_of(&top);
    assert!(same_node(got, leaf.as_ref()));
    assert!(same_node(root_of(leaf.as_ref()), leaf.as_ref()));

    let detailed = as_detailed(got).expect("root should be a DetailedError");
    assert_eq!(
        detailed.op(),
        "database.Service.sqliteFetchContactedStationByCallsign"
    );
}

#[test]
fn root_of_error_without_cause_is_itself() {
    let err = DetailedError::new("solo");
    assert!(same_node(root_of(&err), &err));
}

#[test]
fn root_crosses_foreign_and_detailed_layers() {
    let leaf = eof();
    let inner = DetailedError::new("net.Dial").with_shared_cause(leaf.clone());
    let middle = Wrapped::new("retrying", inner);
    let top = DetailedError::new("svc.Fetch").with_cause(middle);

    assert!(same_node(root_of(&top), as_dyn(&leaf)));
    assert_eq!(chain(&top).count(), 4);
}

#[test]
fn two_node_cycle_terminates() {
    init_tracing();

    let (a, b) = link_cycle("a", "b");
    let got = root_of(a.as_ref());

    assert!(same_node(got, a.as_ref()) || same_node(got, b.as_ref()));
}

#[test]
fn self_loop_terminates() {
    let node = Link::new("self");
    assert!(node.point_to(node.clone()));

    let got = root_of(node.as_ref());
    assert!(same_node(got, node.as_ref()));
    assert_eq!(chain(node.as_ref()).count(), 1);
}

#[test]
fn detailed_error_pointing_into_cycle_terminates() {
    let (a, b) = link_cycle("a", "b");
    let top = DetailedError::new("svc.Loop").with_shared_cause(a.clone());

    let got = root_of(&top);
    assert!(same_node(got, a.as_ref()) || same_node(got, b.as_ref()));
    assert_eq!(chain(&top).count(), 3);
}

#[test]
fn chain_yields_each_node_in_order() {
    let err = ChainBuilder::new()
        .io_leaf("boom")
        .layer("repo.Get", "row lookup failed")
        .layer("svc.Get", "could not load user")
        .build();

    let messages: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec!["could not load user", "row lookup failed", "boom"]
    );
}

#[test]
fn report_renders_full_chain() {
    let err = ChainBuilder::new()
        .io_leaf("boom")
        .layer("repo.Get", "row lookup failed")
        .layer("svc.Get", "could not load user")
        .build();

    assert_eq!(
        err.report().to_string(),
        "could not load user: row lookup failed: boom"
    );
    assert_eq!(
        format!("{:#}", Report::new(&err)),
        "[svc.Get] could not load user: [repo.Get] row lookup failed: boom"
    );
    // The error's own Display never includes the chain.
    assert_eq!(err.to_string(), "could not load user");
}

#[test]
fn report_stops_at_cycle() {
    let (a, _b) = link_cycle("a", "b");
    let top = DetailedError::new("svc.Loop")
        .with_shared_cause(a.clone())
        .with_message("looping");

    assert_eq!(top.report().to_string(), "looping: a: b");
}
