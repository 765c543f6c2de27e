use jiff::Timestamp;
use uuid::Uuid;

use gerikit_core::models::analytics::AnalyticsEvent;
use gerikit_lambda::analytics::{
    AnalyticsStore, DisabledAnalytics, InMemoryAnalytics, OVERFLOW_KEY,
};

fn event(session: Uuid, name: &str, category: Option<&str>, at: i64) -> AnalyticsEvent {
    AnalyticsEvent {
        session_id: session,
        name: name.to_string(),
        category: category.map(str::to_string),
        recorded_at: Timestamp::from_second(at).unwrap(),
    }
}

#[test]
fn empty_store_has_empty_summary() {
    let summary = InMemoryAnalytics::new().summary();
    assert_eq!(summary.total_events, 0);
    assert!(summary.first_event_at.is_none());
}

#[test]
fn counts_by_name_category_and_session() {
    let store = InMemoryAnalytics::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    assert!(store.record(event(a, "note_analyzed", Some("notes"), 100)));
    store.record(event(a, "score_viewed", None, 200));
    store.record(event(b, "note_analyzed", Some("notes"), 150));

    let summary = store.summary();
    assert_eq!(summary.total_events, 3);
    assert_eq!(summary.distinct_sessions, 2);
    assert_eq!(summary.by_name["note_analyzed"], 2);
    assert_eq!(summary.by_name["score_viewed"], 1);
    assert_eq!(summary.by_category.len(), 1);
    assert_eq!(summary.by_category["notes"], 2);
}

#[test]
fn tracks_first_and_last_regardless_of_arrival_order() {
    let store = InMemoryAnalytics::new();
    let s = Uuid::new_v4();
    store.record(event(s, "x", None, 500));
    store.record(event(s, "x", None, 100));
    store.record(event(s, "x", None, 300));

    let summary = store.summary();
    assert_eq!(summary.first_event_at, Some(Timestamp::from_second(100).unwrap()));
    assert_eq!(summary.last_event_at, Some(Timestamp::from_second(500).unwrap()));
}

#[test]
fn concurrent_recording_loses_nothing() {
    let store = InMemoryAnalytics::new();
    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let session = Uuid::new_v4();
                for i in 0..100 {
                    store.record(event(session, "tick", None, i));
                }
            });
        }
    });

    let summary = store.summary();
    assert_eq!(summary.total_events, 800);
    assert_eq!(summary.distinct_sessions, 8);
}

#[test]
fn disabled_store_keeps_nothing() {
    let store = DisabledAnalytics;
    assert!(!store.record(event(Uuid::new_v4(), "x", None, 1)));
    assert_eq!(store.summary().total_events, 0);
}

#[test]
fn distinct_names_and_categories_are_capped() {
    let store = InMemoryAnalytics::with_limits(2, 100);
    let s = Uuid::new_v4();
    for name in ["a", "b", "c", "d", "a"] {
        store.record(event(s, name, Some(name), 1));
    }

    let summary = store.summary();
    assert_eq!(summary.total_events, 5);
    assert_eq!(summary.by_name["a"], 2);
    assert_eq!(summary.by_name["b"], 1);
    assert_eq!(summary.by_name[OVERFLOW_KEY], 2);
    assert_eq!(summary.by_name.len(), 3);
    assert_eq!(summary.by_category.len(), 3);
}

#[test]
fn remembered_sessions_are_capped() {
    let store = InMemoryAnalytics::with_limits(8, 3);
    for _ in 0..10 {
        store.record(event(Uuid::new_v4(), "x", None, 1));
    }

    let summary = store.summary();
    assert_eq!(summary.total_events, 10);
    assert_eq!(summary.distinct_sessions, 3);
}
