//! User-facing terminal messages. Diagnostics go through `tracing` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Info => ("\x1b[34m", "ℹ️"),
            Tone::Success => ("\x1b[32m", "✅"),
            Tone::Warning => ("\x1b[33m", "⚠️"),
            Tone::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn line(tone: Tone, msg: &dyn fmt::Display) -> String {
    let (color, icon) = tone.style();
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Info, &msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Success, &msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Warning, &msg));
}

/// Errors go to stderr so piped output stays clean.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Tone::Error, &msg));
}

/// Screen title followed by an underline as wide as the title.
pub fn header<T: fmt::Display>(title: T) {
    let title = title.to_string();
    let width = unicode_width::UnicodeWidthStr::width(title.as_str()).max(8);
    println!("{BOLD}{title}{RESET}\n{DIM}{}{RESET}", "═".repeat(width));
}

/// "  Label : value" line used by detail views.
pub fn field<T: fmt::Display>(label: &str, value: T) {
    println!("  {DIM}{label:<14}{RESET} : {value}");
}
