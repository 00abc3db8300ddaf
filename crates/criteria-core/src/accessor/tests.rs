use super::*;
use crate::{
    error::{ErrorClass, ResolveError, UnsupportedReason},
    obs::{MetricsSink, ResolveEvent},
    test_fixtures::*,
};
use std::sync::{Arc, Mutex};

// ---- name derivation ---------------------------------------------------

#[test]
fn snake_and_camel_prefixes_are_stripped() {
    let cases = [
        ("get_name", "name"),
        ("get_id_card", "id_card"),
        ("set_name", "name"),
        ("is_active", "active"),
        ("getName", "name"),
        ("getIdCard", "idCard"),
        ("setAddresses", "addresses"),
        ("isActive", "active"),
        ("getURL", "URL"),
        ("getX", "x"),
    ];

    for (method, expected) in cases {
        assert_eq!(derive_field_name(method).as_deref(), Ok(expected), "{method}");
    }
}

#[test]
fn prefix_must_end_at_a_word_boundary() {
    for method in ["issue", "getter", "settle", "name", "get", "to_string"] {
        assert_eq!(
            derive_field_name(method),
            Err(UnsupportedReason::MissingPrefix),
            "{method}"
        );
    }
}

#[test]
fn closure_names_are_rejected() {
    assert_eq!(
        derive_field_name("{{closure}}"),
        Err(UnsupportedReason::InlineClosure)
    );
    assert_eq!(
        derive_field_name("lambda$main$0"),
        Err(UnsupportedReason::InlineClosure)
    );
}

// ---- resolution --------------------------------------------------------

#[test]
fn getter_and_setter_resolve_to_same_field() {
    let resolver = FieldResolver::new();

    let get = resolver.resolve(&PERSON_NAME).expect("getter resolves");
    let set = resolver.resolve(&PERSON_SET_NAME).expect("setter resolves");

    assert_eq!(get.name, "name");
    assert_eq!(set.name, "name");
    assert_eq!(get.entity_path, "test_fixtures::Person");
    assert_eq!(get.entity_name, "Person");
    assert_eq!(get.method, "get_name");
    assert_eq!(set.method, "set_name");
}

#[test]
fn bool_getter_uses_is_prefix() {
    let resolver = FieldResolver::new();

    assert_eq!(resolver.resolve_name(&PERSON_ACTIVE), Ok("active"));
}

#[test]
fn resolve_is_idempotent_and_cached() {
    let resolver = FieldResolver::new();

    let first = resolver.resolve(&PERSON_AGE).expect("first resolve");
    let second = resolver.resolve(&PERSON_AGE).expect("second resolve");

    assert_eq!(first, second);
    assert!(resolver.is_cached(&PERSON_AGE));
    assert_eq!(resolver.len(), 1);

    let report = resolver.metrics();
    assert_eq!(report.misses, 1);
    assert_eq!(report.hits, 1);
    assert_eq!(report.calls(), 2);
}

#[test]
fn distinct_instances_resolve_independently() {
    let resolver = FieldResolver::new();

    let a = resolver.resolve(&PERSON_NAME).expect("first instance");
    assert!(!resolver.is_cached(&PERSON_NAME_AGAIN));

    let b = resolver.resolve(&PERSON_NAME_AGAIN).expect("second instance");

    assert_eq!(a, b);
    assert_eq!(resolver.len(), 2);
    assert_eq!(resolver.metrics().misses, 2);
}

#[test]
fn inline_closure_is_unsupported() {
    let resolver = FieldResolver::new();

    let err = resolver.resolve(&PERSON_NAME_INLINE).unwrap_err();

    assert_eq!(
        err,
        ResolveError::UnsupportedAccessorKind {
            entity: "test_fixtures::Person",
            method: INLINE_METHOD,
            reason: UnsupportedReason::InlineClosure,
        }
    );
    assert_eq!(err.class(), ErrorClass::Unsupported);
    // inline accessors still work as plain functions
    let person = Person {
        name: "Tom".to_string(),
        ..Person::default()
    };
    assert_eq!(PERSON_NAME_INLINE.get(&person).map(String::as_str), Some("Tom"));
}

#[test]
fn missing_field_is_reported_and_not_cached() {
    let resolver = FieldResolver::new();

    let err = resolver.resolve(&PERSON_NICKNAME).unwrap_err();

    assert_eq!(
        err,
        ResolveError::FieldNotFound {
            entity: "test_fixtures::Person",
            field: "nickname".to_string(),
            method: "get_nickname",
        }
    );
    assert_eq!(err.class(), ErrorClass::NotFound);
    assert!(resolver.is_empty());
    assert_eq!(resolver.metrics().failures, 1);
}

#[test]
fn resolve_all_keeps_order() {
    let resolver = FieldResolver::new();

    let names: Vec<_> = resolver
        .resolve_all(&[&PERSON_ID_CARD, &PERSON_NAME, &ID_CARD_NUMBER])
        .expect("all resolve")
        .into_iter()
        .map(|descriptor| descriptor.name)
        .collect();

    assert_eq!(names, ["id_card", "name", "number"]);
}

#[test]
fn clear_drops_cached_descriptors() {
    let resolver = FieldResolver::new();
    resolver.resolve(&PERSON_NAME).expect("resolves");
    assert!(!resolver.is_empty());

    resolver.clear();

    assert!(resolver.is_empty());
    resolver.resolve(&PERSON_NAME).expect("resolves again");
    assert_eq!(resolver.metrics().misses, 2);
}

#[test]
fn concurrent_resolution_converges() {
    let resolver = FieldResolver::new();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..50 {
                    let descriptor = resolver.resolve(&PERSON_ADDRESSES).expect("resolves");
                    assert_eq!(descriptor.name, "addresses");
                }
            });
        }
    });

    assert_eq!(resolver.len(), 1);
    let report = resolver.metrics();
    assert_eq!(report.calls(), 400);
    assert_eq!(report.failures, 0);
}

#[test]
fn accessor_reads_and_writes() {
    let mut person = Person::default();

    assert!(PERSON_SET_NAME.set(&mut person, "Ann".to_string()));
    assert_eq!(PERSON_NAME.get(&person).map(String::as_str), Some("Ann"));
    assert!(PERSON_SET_NAME.get(&person).is_none());
    assert!(!PERSON_NAME.set(&mut person, "Bob".to_string()));
    assert_eq!(person.name, "Ann");
}

// ---- sinks -------------------------------------------------------------

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<String>>,
}

impl MetricsSink for RecordingSink {
    fn record(&self, event: ResolveEvent) {
        let label = match event {
            ResolveEvent::Hit { entity_path } => format!("hit:{entity_path}"),
            ResolveEvent::Miss { entity_path } => format!("miss:{entity_path}"),
            ResolveEvent::Failure { entity_path, class } => format!("fail:{entity_path}:{class}"),
        };
        self.events.lock().expect("sink lock").push(label);
    }
}

#[test]
fn injected_sink_observes_every_event() {
    let sink = Arc::new(RecordingSink::default());
    let resolver = FieldResolver::with_sink(sink.clone());

    resolver.resolve(&ADDRESS_CITY).expect("resolves");
    resolver.resolve(&ADDRESS_CITY).expect("resolves");
    let _ = resolver.resolve(&PERSON_NICKNAME);

    let events = sink.events.lock().expect("sink lock").clone();
    assert_eq!(
        events,
        [
            "miss:test_fixtures::Address",
            "hit:test_fixtures::Address",
            "fail:test_fixtures::Person:not_found",
        ]
    );
}
