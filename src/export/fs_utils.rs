use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

/// "s", "si", "sí", "y" and "yes" confirm; anything else (including EOF) declines.
fn confirmed<R: BufRead>(input: &mut R) -> AppResult<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    ))
}

/// An existing target is only replaced with `force` or an explicit yes.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("El archivo '{}' ya existe.", path.display()));
    print!("¿Sobrescribir? [s/N]: ");
    io::stdout().flush().ok();

    if confirmed(&mut io::stdin().lock())? {
        debug!(path = %path.display(), "overwrite confirmed");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "exportación cancelada, '{}' no fue modificado",
            path.display()
        )))
    }
}
