use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn launch(editor: &str, path: &Path) -> bool {
    match Command::new(editor).arg(path).status() {
        Ok(status) => status.success(),
        Err(e) => {
            debug!(editor, error = %e, "editor could not be started");
            false
        }
    }
}

/// `kivo config --print | --edit [--editor E]`
pub fn handle(print: bool, edit: bool, editor: Option<&str>, cfg: &Config) -> AppResult<()> {
    let path = Config::config_file();

    if print {
        println!("📄 Configuración actual ({}):\n", path.display());
        println!("{}", cfg.to_yaml()?);
    }

    if edit {
        if !path.exists() {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&path, cfg.to_yaml()?)?;
            info(format!("Archivo de configuración creado en {}", path.display()));
        }

        let fallback = default_editor();
        let chosen = editor.map(str::to_string).unwrap_or_else(|| fallback.clone());

        let used = if launch(&chosen, &path) {
            Some(chosen)
        } else if chosen != fallback {
            warning(format!("No se pudo usar '{chosen}', probando con '{fallback}'"));
            launch(&fallback, &path).then_some(fallback)
        } else {
            None
        };

        match used {
            Some(ed) => success(format!("Configuración editada con '{ed}'")),
            None => {
                return Err(AppError::Config(format!(
                    "no se pudo abrir {} con un editor",
                    path.display()
                )));
            }
        }
    }

    if !print && !edit {
        info("Usa --print para ver la configuración o --edit para modificarla.");
    }
    Ok(())
}
