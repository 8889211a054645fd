use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{field, header, success};
use crate::utils::path::expand_tilde;

/// `kivo init`: create `~/.kivo/` and write a default `kivo.conf`
/// (pointing at `--api-url` when given). `--session` is not persisted.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.api_url.clone(), cli.test)?;
    cfg.api_base()?;

    header("Kivo");
    field("Configuración", Config::config_file().display());
    field("API", &cfg.api_url);
    field("Sesión", expand_tilde(&cfg.session_file).display());

    success("Listo. Ejecuta `kivo login --rut <RUT>` para comenzar.");
    Ok(())
}
