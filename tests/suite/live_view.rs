//! The live todo view driven end to end against a mock server.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lecture_engine::{Alert, FETCH_FAILED_MESSAGE, NavDirection, UiOptions};

use crate::common::{
    app_with, live_deck, mount_status, mount_todo, mount_todo_delayed, settle, three_slide_deck,
};

#[tokio::test]
async fn initial_mount_shows_first_todo() {
    let server = MockServer::start().await;
    mount_todo(&server, 1, "delectus aut autem", false).await;

    let mut app = app_with(&server, live_deck(), UiOptions::default());
    let view = app.live_view().expect("mounted on construction");
    assert_eq!(view.key().value(), 1);
    assert!(view.resource().is_none());

    settle(&mut app).await;
    let todo = app.live_view().and_then(|v| v.resource()).expect("loaded");
    assert_eq!(todo.id, 1);
    assert_eq!(todo.title, "delectus aut autem");
    assert!(!todo.completed);
    assert!(app.alert().is_none());
}

#[tokio::test]
async fn key_stays_within_bounds_under_any_sequence() {
    let server = MockServer::start().await;
    for id in 1..=5 {
        mount_todo(&server, id, &format!("todo {id}"), id % 2 == 0).await;
    }

    let mut app = app_with(&server, live_deck(), UiOptions::default());
    let steps = [
        NavDirection::Previous,
        NavDirection::Next,
        NavDirection::Next,
        NavDirection::Next,
        NavDirection::Next,
        NavDirection::Next,
        NavDirection::Next,
        NavDirection::Previous,
        NavDirection::Previous,
    ];
    for step in steps {
        app.navigate_live(step);
        let key = app.live_view().expect("mounted").key().value();
        assert!((1..=5).contains(&key), "key {key} escaped bounds");
    }
    settle(&mut app).await;
    let view = app.live_view().expect("mounted");
    assert_eq!(view.key().value(), 3);
    assert_eq!(view.resource().map(|t| t.title.as_str()), Some("todo 3"));
}

#[tokio::test]
async fn effective_navigation_clears_display_immediately() {
    let server = MockServer::start().await;
    mount_todo(&server, 1, "one", false).await;
    mount_todo(&server, 2, "two", true).await;

    let mut app = app_with(&server, live_deck(), UiOptions::default());
    settle(&mut app).await;
    assert!(app.live_view().and_then(|v| v.resource()).is_some());

    assert!(app.navigate_live(NavDirection::Next));
    assert!(app.live_view().and_then(|v| v.resource()).is_none());

    settle(&mut app).await;
    let todo = app.live_view().and_then(|v| v.resource()).expect("loaded");
    assert_eq!(todo.id, 2);
    assert!(todo.completed);
}

#[tokio::test]
async fn boundary_moves_keep_display() {
    let server = MockServer::start().await;
    mount_todo(&server, 1, "one", false).await;

    let mut app = app_with(&server, live_deck(), UiOptions::default());
    settle(&mut app).await;
    let epoch = app.live_view().expect("mounted").epoch();

    assert!(!app.navigate_live(NavDirection::Previous));
    let view = app.live_view().expect("mounted");
    assert_eq!(view.epoch(), epoch);
    assert_eq!(view.resource().map(|t| t.id), Some(1));
}

#[tokio::test]
async fn slow_earlier_response_never_overwrites_later_key() {
    let server = MockServer::start().await;
    mount_todo(&server, 1, "one", false).await;
    mount_todo_delayed(&server, 2, "two", false, Duration::from_millis(300)).await;
    mount_todo(&server, 3, "three", false).await;

    let mut app = app_with(&server, live_deck(), UiOptions::default());
    settle(&mut app).await;
    assert!(app.navigate_live(NavDirection::Next));
    assert!(app.navigate_live(NavDirection::Next));

    // Key 3 resolves first; key 2 lands afterwards and must be dropped.
    settle(&mut app).await;
    let view = app.live_view().expect("mounted");
    assert_eq!(view.key().value(), 3);
    assert_eq!(view.resource().map(|t| t.title.as_str()), Some("three"));
}

#[tokio::test]
async fn failure_alerts_and_leaves_display_empty() {
    let server = MockServer::start().await;
    mount_todo(&server, 1, "one", false).await;
    mount_status(&server, 2, 500).await;

    let mut app = app_with(&server, live_deck(), UiOptions::default());
    settle(&mut app).await;
    assert!(app.navigate_live(NavDirection::Next));
    settle(&mut app).await;

    assert_eq!(app.alert().map(Alert::message), Some(FETCH_FAILED_MESSAGE));
    let view = app.live_view().expect("mounted");
    assert_eq!(view.key().value(), 2);
    assert!(view.resource().is_none());
}

#[tokio::test]
async fn superseded_failure_raises_no_alert() {
    let server = MockServer::start().await;
    mount_todo(&server, 1, "one", false).await;
    Mock::given(method("GET"))
        .and(path("/todos/2"))
        .respond_with(ResponseTemplate::new(500).set_delay(Duration::from_millis(200)))
        .mount(&server)
        .await;
    mount_todo(&server, 3, "three", false).await;

    let mut app = app_with(&server, live_deck(), UiOptions::default());
    settle(&mut app).await;
    app.navigate_live(NavDirection::Next);
    app.navigate_live(NavDirection::Next);
    settle(&mut app).await;

    assert!(app.alert().is_none());
    assert_eq!(
        app.live_view().and_then(|v| v.resource()).map(|t| t.id),
        Some(3)
    );
}

#[tokio::test]
async fn leaving_the_slide_discards_pending_reads() {
    let server = MockServer::start().await;
    mount_todo_delayed(&server, 1, "one", false, Duration::from_millis(200)).await;

    let mut app = app_with(&server, three_slide_deck(), UiOptions::default());
    assert!(app.next_slide());
    assert!(app.live().is_some_and(|live| live.in_flight() == 1));

    assert!(app.next_slide());
    assert!(app.live_view().is_none());
    tokio::time::sleep(Duration::from_millis(300)).await;
    app.process_fetch_events();
    assert!(app.alert().is_none());

    // Coming back mounts a fresh view at the first key.
    assert!(app.previous_slide());
    let view = app.live_view().expect("remounted");
    assert_eq!(view.key().value(), 1);
    assert!(view.resource().is_none());
    settle(&mut app).await;
    assert_eq!(
        app.live_view().and_then(|v| v.resource()).map(|t| t.id),
        Some(1)
    );
}
