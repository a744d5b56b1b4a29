//! Key bindings applied through the TUI input layer.

use crossterm::event::KeyCode;
use wiremock::MockServer;

use lecture_engine::UiOptions;
use lecture_tui::apply_event;

use crate::common::{
    app_with, char_key, ctrl_c, key, live_deck, mount_status, mount_todo, release, settle,
    three_slide_deck,
};

#[tokio::test]
async fn slide_keys_move_and_clamp() {
    let server = MockServer::start().await;
    mount_todo(&server, 1, "one", false).await;
    let mut app = app_with(&server, three_slide_deck(), UiOptions::default());

    for ev in [key(KeyCode::Left), key(KeyCode::PageUp), char_key('p')] {
        assert!(!apply_event(&mut app, ev));
        assert_eq!(app.deck().index(), 0);
    }

    apply_event(&mut app, key(KeyCode::Right));
    assert_eq!(app.deck().index(), 1);
    apply_event(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.deck().index(), 0);
    apply_event(&mut app, char_key(' '));
    apply_event(&mut app, key(KeyCode::PageDown));
    assert_eq!(app.deck().index(), 2);
    apply_event(&mut app, char_key('n'));
    assert_eq!(app.deck().index(), 2);

    apply_event(&mut app, key(KeyCode::Home));
    assert_eq!(app.deck().index(), 0);
    apply_event(&mut app, key(KeyCode::End));
    assert_eq!(app.deck().index(), 2);
    app.shutdown();
}

#[tokio::test]
async fn release_events_are_ignored() {
    let server = MockServer::start().await;
    let mut app = app_with(&server, three_slide_deck(), UiOptions::default());
    apply_event(&mut app, release(KeyCode::Right));
    assert_eq!(app.deck().index(), 0);
}

#[tokio::test]
async fn live_keys_step_the_todo() {
    let server = MockServer::start().await;
    mount_todo(&server, 1, "one", false).await;
    mount_todo(&server, 2, "two", false).await;
    let mut app = app_with(&server, live_deck(), UiOptions::default());
    settle(&mut app).await;

    apply_event(&mut app, char_key('l'));
    assert_eq!(app.live_view().expect("mounted").key().value(), 2);
    apply_event(&mut app, char_key('<'));
    assert_eq!(app.live_view().expect("mounted").key().value(), 1);
    apply_event(&mut app, char_key('>'));
    apply_event(&mut app, char_key('h'));
    assert_eq!(app.live_view().expect("mounted").key().value(), 1);
    settle(&mut app).await;
}

#[tokio::test]
async fn quit_keys() {
    let server = MockServer::start().await;
    for ev in [char_key('q'), key(KeyCode::Esc), ctrl_c()] {
        let mut app = app_with(&server, three_slide_deck(), UiOptions::default());
        assert!(apply_event(&mut app, ev));
        assert!(app.should_quit());
    }
}

#[tokio::test]
async fn alert_swallows_input_until_dismissed() {
    let server = MockServer::start().await;
    mount_status(&server, 1, 404).await;

    let mut app = app_with(&server, three_slide_deck(), UiOptions::default());
    apply_event(&mut app, key(KeyCode::Right));
    settle(&mut app).await;
    assert!(app.alert().is_some());

    for ev in [key(KeyCode::Right), char_key('l'), key(KeyCode::Down)] {
        assert!(!apply_event(&mut app, ev));
    }
    assert_eq!(app.deck().index(), 1);
    assert_eq!(app.live_view().expect("mounted").key().value(), 1);

    // `q` closes the alert instead of quitting.
    assert!(!apply_event(&mut app, char_key('q')));
    assert!(app.alert().is_none());
    assert!(!app.should_quit());

    apply_event(&mut app, key(KeyCode::Right));
    assert_eq!(app.deck().index(), 2);
}

#[tokio::test]
async fn every_dismiss_key_closes_the_alert() {
    let server = MockServer::start().await;
    mount_status(&server, 1, 500).await;

    for dismiss in [key(KeyCode::Enter), key(KeyCode::Esc), char_key(' ')] {
        let mut app = app_with(&server, live_deck(), UiOptions::default());
        settle(&mut app).await;
        assert!(app.alert().is_some());
        assert!(!apply_event(&mut app, dismiss));
        assert!(app.alert().is_none());
        assert!(!app.should_quit());
    }
}

#[tokio::test]
async fn ctrl_c_quits_even_with_alert() {
    let server = MockServer::start().await;
    mount_status(&server, 1, 500).await;
    let mut app = app_with(&server, live_deck(), UiOptions::default());
    settle(&mut app).await;
    assert!(app.alert().is_some());
    assert!(apply_event(&mut app, ctrl_c()));
}
