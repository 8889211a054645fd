mod common;
use common::{FakeTransport, client, status_json};
use kivo::cli::commands::clock::run_screen;
use kivo::core::{CountdownState, MarkingScreen};
use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test(start_paused = true)]
async fn interrupt_ends_the_screen_while_input_stays_open() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(true, 100));
    let mut screen = MarkingScreen::new(client(&fake, Some("t")), Duration::from_secs(1));
    screen.mount().await.unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    run_screen(&mut screen, &mut rx, tokio::time::sleep(Duration::from_secs(3))).await;

    assert!(!tx.is_closed());
    assert!(!screen.timer_running());
    assert!(matches!(screen.state(), CountdownState::Counting(97..=98)));

    let frozen = screen.state();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(screen.state(), frozen);
    assert_eq!(fake.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn typed_commands_mark_then_quit() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(true, 100))
        .reply(201, json!({"id": 9, "tipo_marca": "salida"}))
        .reply(200, json!({"tiene_entrada_activa": false, "segundos_restantes": 0}));
    let mut screen = MarkingScreen::new(client(&fake, Some("t")), Duration::from_secs(1));
    screen.mount().await.unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    tx.send("s".to_string()).unwrap();
    tx.send("q".to_string()).unwrap();
    run_screen(&mut screen, &mut rx, std::future::pending()).await;

    assert_eq!(screen.state(), CountdownState::Idle);
    assert!(!screen.timer_running());

    let reqs = fake.requests();
    assert_eq!(reqs.len(), 3);
    assert_eq!(reqs[1].method, Method::POST);
    assert_eq!(reqs[1].path, "asistencias/marcar/");
    assert_eq!(reqs[1].body.as_ref().unwrap()["tipo_marca"], "salida");
}

#[tokio::test(start_paused = true)]
async fn closed_input_ends_the_screen() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(false, 0));
    let mut screen = MarkingScreen::new(client(&fake, Some("t")), Duration::from_secs(1));
    screen.mount().await.unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    drop(tx);
    run_screen(&mut screen, &mut rx, std::future::pending()).await;

    assert_eq!(screen.state(), CountdownState::Idle);
    assert_eq!(fake.count(), 1);
}
