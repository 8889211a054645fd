//! `~` expansion for user-supplied paths (session file, export targets).

use std::path::PathBuf;

/// `~` and `~/...` resolve against the home directory; anything else is
/// returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => Some(""),
        Some(r) if r.starts_with('/') => Some(r.trim_start_matches('/')),
        _ => None,
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
