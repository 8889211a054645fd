use crate::cli::commands::AppContext;
use crate::core::{CountdownState, MarkingScreen};
use crate::errors::AppResult;
use crate::models::{Capability, MarkType};
use crate::ui::messages::{field, header, success};
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};
use crate::utils::date;

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("{GREEN}[{label}]{RESET}")
    } else {
        format!("{GREY}[{label}]{RESET}")
    }
}

/// Render the marking screen once.
pub(crate) fn print_screen(screen: &MarkingScreen) {
    let h = screen.header(date::today());

    header(&h.company);
    println!("  {}", h.greeting);
    field("Turno", &h.shift);
    field("Fecha", &h.date);
    match screen.state() {
        CountdownState::Idle => field("Estado", "Sin entrada registrada"),
        CountdownState::Counting(_) => field("Tiempo restante", &h.countdown),
        CountdownState::Expired => field(
            "Estado",
            format!("{YELLOW}Jornada finalizada, registra tu salida{RESET}"),
        ),
    }
    println!(
        "\n  {}  {}\n",
        button("Entrada", screen.entry_enabled()),
        button("Salida", screen.exit_enabled())
    );
}

/// Mount the marking screen and show one snapshot.
pub async fn show(ctx: &AppContext) -> AppResult<()> {
    ctx.require(Capability::MarkAttendance)?;

    let mut screen = MarkingScreen::new(ctx.api(), ctx.tick());
    screen.mount().await?;
    print_screen(&screen);
    screen.unmount();
    Ok(())
}

/// `kivo mark entrada|salida`
pub async fn mark(ctx: &AppContext, kind: MarkType) -> AppResult<()> {
    ctx.require(Capability::MarkAttendance)?;

    let mut screen = MarkingScreen::new(ctx.api(), ctx.tick());
    screen.mount().await?;
    let confirmation = screen.mark(kind).await?;
    success(confirmation);
    print_screen(&screen);
    screen.unmount();
    Ok(())
}
