/// ANSI color helper utilities for terminal output.
use crate::models::{MarkType, RequestState};
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

fn ansi_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_pattern().replace_all(s, "").into_owned()
}

/// Colour of an audit action (`accion` column).
pub fn color_for_action(action: &str) -> Colour {
    match action.to_ascii_lowercase().as_str() {
        "crear" | "create" | "marcar" => Colour::Green,
        "eliminar" | "delete" => Colour::Red,
        "actualizar" | "editar" | "update" => Colour::Yellow,
        "aceptar" | "rechazar" | "resolver" => Colour::Purple,
        "login" | "logout" => Colour::Blue,
        "exportar" => Colour::RGB(255, 153, 51), // naranjo
        _ => Colour::White,
    }
}

pub fn paint_action(action: &str) -> String {
    color_for_action(action).paint(action).to_string()
}

pub fn colorize_state(state: RequestState) -> String {
    let color = match state {
        RequestState::Pending => YELLOW,
        RequestState::Accepted => GREEN,
        RequestState::Rejected => RED,
    };
    format!("{color}{}{RESET}", state.code())
}

pub fn colorize_mark(kind: MarkType) -> String {
    let color = if kind.is_entry() { GREEN } else { RED };
    format!("{color}{}{RESET}", kind.label())
}

/// GREY for "-" placeholders, unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
