mod common;
use chrono::NaiveDate;
use common::{FakeTransport, client, status_json};
use kivo::core::{CountdownState, MarkingScreen};
use kivo::errors::AppError;
use kivo::models::MarkType;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::sleep;

const TICK: Duration = Duration::from_secs(1);

fn screen(fake: &Arc<FakeTransport>) -> MarkingScreen {
    MarkingScreen::new(client(fake, Some("tok")), TICK)
}

#[tokio::test(start_paused = true)]
async fn idle_after_login_enables_entry_only() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(false, 0));
    let mut s = screen(&fake);

    assert_eq!(s.mount().await.unwrap(), CountdownState::Idle);
    assert!(s.entry_enabled());
    assert!(!s.exit_enabled());
    assert!(!s.timer_running());

    let req = &fake.requests()[0];
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "asistencias/marcar/");
    assert_eq!(req.bearer.as_deref(), Some("tok"));
}

#[tokio::test(start_paused = true)]
async fn entry_mark_refetches_and_starts_counting() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(false, 0))
        .reply(201, json!({"id": 10, "tipo_marca": "entrada"}))
        .reply(200, status_json(true, 28800));
    let mut s = screen(&fake);
    s.mount().await.unwrap();

    let msg = s.mark(MarkType::Entrada).await.unwrap();
    assert_eq!(msg, "Marca de entrada registrada");
    assert_eq!(s.state(), CountdownState::Counting(28800));
    assert!(!s.entry_enabled());
    assert!(s.exit_enabled());

    let reqs = fake.requests();
    assert_eq!(reqs.len(), 3);
    assert_eq!(reqs[1].method, Method::POST);
    assert_eq!(reqs[1].body, Some(json!({"tipo_marca": "entrada"})));
    assert_eq!(reqs[2].method, Method::GET);
}

#[tokio::test(start_paused = true)]
async fn disabled_action_is_refused_locally() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(true, 600));
    let mut s = screen(&fake);
    s.mount().await.unwrap();

    let err = s.mark(MarkType::Entrada).await.unwrap_err();
    assert!(matches!(err, AppError::NotPermitted(_)));
    assert_eq!(fake.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_mark_leaves_state_untouched() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(false, 0))
        .reply(400, json!({"detail": "No tienes un turno asignado."}));
    let mut s = screen(&fake);
    s.mount().await.unwrap();

    match s.mark(MarkType::Entrada).await.unwrap_err() {
        AppError::Request { detail, .. } => assert_eq!(detail, "No tienes un turno asignado."),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(s.state(), CountdownState::Idle);
    assert_eq!(fake.count(), 2);
}

#[tokio::test(start_paused = true)]
async fn failed_refresh_keeps_last_known_state() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(true, 100)).fail_network();
    let mut s = screen(&fake);
    s.mount().await.unwrap();

    assert!(s.refresh().await.is_err());
    assert_eq!(s.state(), CountdownState::Counting(100));
    assert!(s.exit_enabled());
}

#[tokio::test(start_paused = true)]
async fn countdown_decrements_once_per_tick_and_expires() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(true, 3));
    let mut s = screen(&fake);
    s.mount().await.unwrap();

    sleep(Duration::from_millis(1500)).await;
    assert_eq!(s.state(), CountdownState::Counting(2));

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(s.state(), CountdownState::Counting(1));

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(s.state(), CountdownState::Expired);
    assert_eq!(s.state().seconds(), 0);
    assert!(!s.timer_running());

    // expiry triggers no network call and exit stays available
    sleep(Duration::from_secs(10)).await;
    assert_eq!(fake.count(), 1);
    assert!(s.exit_enabled());
}

#[tokio::test(start_paused = true)]
async fn new_status_replaces_the_running_timer() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(true, 100))
        .reply(200, status_json(true, 100));
    let mut s = screen(&fake);
    s.mount().await.unwrap();
    s.refresh().await.unwrap();

    sleep(Duration::from_millis(3500)).await;
    // one timer: three ticks, not six
    assert_eq!(s.state(), CountdownState::Counting(97));
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_each_tick() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(true, 5));
    let mut s = screen(&fake);
    s.mount().await.unwrap();

    let mut rx = s.subscribe();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), CountdownState::Counting(4));
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), CountdownState::Counting(3));
}

#[tokio::test(start_paused = true)]
async fn unmount_cancels_the_countdown() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(true, 100));
    let mut s = screen(&fake);
    s.mount().await.unwrap();

    s.unmount();
    sleep(Duration::from_secs(5)).await;
    assert_eq!(s.state(), CountdownState::Counting(100));
    assert!(!s.timer_running());
}

#[tokio::test]
async fn late_response_after_unmount_is_discarded() {
    let gate = Arc::new(Notify::new());
    let fake = FakeTransport::gated(gate.clone());
    fake.reply(200, status_json(true, 500));
    let mut s = screen(&fake);
    let life = s.lifetime();

    let (result, _) = tokio::join!(s.mount(), async {
        tokio::task::yield_now().await;
        life.unmount();
        gate.notify_one();
    });

    assert_eq!(result.unwrap(), CountdownState::Idle);
    assert_eq!(s.state(), CountdownState::Idle);
    assert!(s.status().is_none());
    assert!(!s.timer_running());
}

#[tokio::test(start_paused = true)]
async fn header_shows_company_shift_and_countdown() {
    let fake = FakeTransport::new();
    fake.reply(200, status_json(true, 3725)).reply(
        200,
        json!({"tiene_entrada_activa": false, "segundos_restantes": 0}),
    );
    let mut s = screen(&fake);
    s.mount().await.unwrap();

    let day = NaiveDate::from_ymd_opt(2025, 10, 13).unwrap();
    let h = s.header(day);
    assert_eq!(h.company, "Kivo SpA");
    assert_eq!(h.greeting, "Hola, Juan Pérez");
    assert_eq!(h.shift, "09:00:00 - 17:00:00");
    assert_eq!(h.date, "Lunes, 13 de octubre de 2025");
    assert_eq!(h.countdown, "01:02:05");

    s.refresh().await.unwrap();
    let h = s.header(day);
    assert_eq!(h.company, "TU EMPRESA");
    assert_eq!(h.greeting, "Hola, Usuario");
    assert_eq!(h.shift, "Sin turno asignado");
    assert_eq!(h.countdown, "00:00:00");
}
