//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lecture_engine::{App, Block, DATA_FETCHING, Deck, KeyBounds, Slide, TodoClient, UiOptions};

/// Mount `GET /todos/{id}` answering with a jsonplaceholder-shaped todo.
pub async fn mount_todo(server: &MockServer, id: u32, title: &str, completed: bool) {
    mount_todo_delayed(server, id, title, completed, Duration::ZERO).await;
}

pub async fn mount_todo_delayed(
    server: &MockServer,
    id: u32,
    title: &str,
    completed: bool,
    delay: Duration,
) {
    let body = serde_json::json!({
        "userId": 1,
        "id": id,
        "title": title,
        "completed": completed
    });

    Mock::given(method("GET"))
        .and(path(format!("/todos/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body).set_delay(delay))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, id: u32, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/todos/{id}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Intro, live and outro slides.
pub fn three_slide_deck() -> Deck {
    Deck::new(vec![
        Slide::new("intro", vec![Block::text("before the demo")]),
        Slide::new("live", vec![Block::text("browse todos"), Block::LiveDemo]),
        Slide::new("outro", vec![Block::text("after the demo")]),
    ])
    .expect("non-empty deck")
}

/// A deck whose only slide is live, so the view mounts on construction.
pub fn live_deck() -> Deck {
    Deck::new(vec![Slide::new("live", vec![Block::LiveDemo])]).expect("non-empty deck")
}

pub fn client_for(server: &MockServer) -> TodoClient {
    TodoClient::new(
        Url::parse(&server.uri()).expect("mock uri"),
        Duration::from_secs(5),
    )
    .expect("client")
}

pub fn app_with(server: &MockServer, deck: Deck, ui_options: UiOptions) -> App {
    App::new(
        DATA_FETCHING,
        deck,
        client_for(server),
        KeyBounds::DEFAULT,
        ui_options,
    )
}

/// Pump completions until every read the live view issued has come back.
pub async fn settle(app: &mut App) {
    for _ in 0..300 {
        app.process_fetch_events();
        if app.live().is_none_or(|live| live.in_flight() == 0) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("reads did not settle");
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn char_key(c: char) -> Event {
    key(KeyCode::Char(c))
}

pub fn ctrl_c() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

pub fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        code,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ))
}
