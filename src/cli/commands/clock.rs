//! Interactive marking screen: redraws the countdown on every tick and reads
//! single-letter commands from stdin until `q` or Ctrl-C.

use crate::cli::commands::AppContext;
use crate::cli::commands::status::print_screen;
use crate::core::{CountdownState, MarkingScreen};
use crate::errors::AppResult;
use crate::models::{Capability, MarkType};
use crate::ui::messages::{error, info, success};
use crate::utils::format_hms;
use std::future::Future;
use std::io::{self, BufRead, Write};
use std::thread;
use tokio::sync::mpsc;
use tracing::{debug, warn};

const HELP: &str = "Comandos: e=entrada  s=salida  r=actualizar  q=salir";

fn print_tick(state: CountdownState) {
    let line = match state {
        CountdownState::Counting(n) => format!("⏱  Tiempo restante de jornada: {}", format_hms(n)),
        CountdownState::Expired => "⏱  Jornada finalizada: 00:00:00".to_string(),
        CountdownState::Idle => "⏱  Sin entrada activa".to_string(),
    };
    print!("\r{line}   ");
    io::stdout().flush().ok();
}

async fn run_action(screen: &mut MarkingScreen, action: &str) {
    let result = match action {
        "e" | "entrada" => screen.mark(MarkType::Entrada).await.map(Some),
        "s" | "salida" => screen.mark(MarkType::Salida).await.map(Some),
        "r" => screen.refresh().await.map(|_| None),
        _ => {
            info(HELP);
            return;
        }
    };

    println!();
    match result {
        Ok(Some(confirmation)) => success(confirmation),
        Ok(None) => {}
        Err(e) => error(e),
    }
    print_screen(screen);
}

/// Forward stdin lines from a plain thread. A blocked read there never
/// holds up runtime shutdown; the thread dies with the process.
fn stdin_lines() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Drive a mounted screen until `q`, end of input or `shutdown` resolves.
/// The screen is unmounted on return.
pub async fn run_screen<S>(
    screen: &mut MarkingScreen,
    commands: &mut mpsc::UnboundedReceiver<String>,
    shutdown: S,
) where
    S: Future<Output = ()>,
{
    let mut ticks = screen.subscribe();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = ticks.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = *ticks.borrow_and_update();
                print_tick(state);
            }
            line = commands.recv() => {
                let Some(line) = line else {
                    debug!("stdin closed");
                    break;
                };
                let action = line.trim().to_lowercase();
                if action == "q" {
                    break;
                }
                run_action(screen, &action).await;
            }
            _ = &mut shutdown => {
                debug!("interrupted");
                break;
            }
        }
    }

    println!();
    screen.unmount();
}

pub async fn handle(ctx: &AppContext) -> AppResult<()> {
    ctx.require(Capability::MarkAttendance)?;

    let mut screen = MarkingScreen::new(ctx.api(), ctx.tick());
    screen.mount().await?;
    print_screen(&screen);
    info(HELP);

    let mut commands = stdin_lines();
    let interrupted = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };
    run_screen(&mut screen, &mut commands, interrupted).await;
    Ok(())
}
