//! The bundled lecture deck, built from configuration.

use std::fs;

use crossterm::event::KeyCode;
use wiremock::MockServer;

use lecture_config::LectureConfig;
use lecture_engine::App;
use lecture_tui::apply_event;

use crate::common::{key, mount_todo, settle};

fn config_for(server: &MockServer, extra: &str) -> (tempfile::TempDir, LectureConfig) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    let raw = format!("[demo]\nbase_url = \"{}\"\n{extra}", server.uri());
    fs::write(&path, raw).expect("write config");
    let config = LectureConfig::load_from(&path)
        .expect("valid config")
        .expect("config present");
    (dir, config)
}

#[tokio::test]
async fn walking_the_deck_reaches_the_live_slide_last() {
    let server = MockServer::start().await;
    mount_todo(&server, 1, "delectus aut autem", false).await;
    let (_dir, config) = config_for(&server, "");

    let mut app = App::from_config(Some(&config)).expect("app");
    assert_eq!(app.deck().position(), (1, 16));
    assert_eq!(app.info().title, "API 통신하기");

    for _ in 0..14 {
        apply_event(&mut app, key(KeyCode::Right));
        assert!(app.live_view().is_none());
    }
    apply_event(&mut app, key(KeyCode::Right));
    assert_eq!(app.deck().position(), (16, 16));
    settle(&mut app).await;
    let todo = app.live_view().and_then(|v| v.resource()).expect("loaded");
    assert_eq!(todo.title, "delectus aut autem");

    apply_event(&mut app, key(KeyCode::Right));
    assert_eq!(app.deck().position(), (16, 16));
    app.shutdown();
}

#[tokio::test]
async fn configured_bounds_cap_navigation() {
    let server = MockServer::start().await;
    for id in 2..=4 {
        mount_todo(&server, id, "t", false).await;
    }
    let (_dir, config) = config_for(&server, "min_id = 2\nmax_id = 3\n");

    let mut app = App::from_config(Some(&config)).expect("app");
    apply_event(&mut app, key(KeyCode::End));
    assert_eq!(app.live_view().expect("mounted").key().value(), 2);
    for _ in 0..5 {
        app.navigate_live(lecture_engine::NavDirection::Next);
    }
    assert_eq!(app.live_view().expect("mounted").key().value(), 3);
    settle(&mut app).await;
    assert!(app.alert().is_none());
}

#[test]
fn inverted_bounds_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[demo]\nmin_id = 5\nmax_id = 1\n").expect("write config");
    let config = LectureConfig::load_from(&path)
        .expect("parses")
        .expect("present");
    assert!(config.demo_settings().is_err());
}
