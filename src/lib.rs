//! Kivo library root.
//! Exposes the CLI parser, the high-level run() function and the client
//! building blocks (session, API gateway, view state, export).

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use api::{HttpTransport, Transport};
use clap::Parser;
use cli::commands::{self as handlers, AppContext};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use session::{SessionStorage, SessionStore};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utils::path::expand_tilde;

/// Diagnostics to stderr, filtered by `KIVO_LOG` (default `warn`, `-v` → `debug`).
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "kivo=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("KIVO_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, ctx: &mut AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => handlers::init::handle(cli),
        Commands::Config {
            print_config,
            edit_config,
            editor,
        } => handlers::config::handle(*print_config, *edit_config, editor.as_deref(), &ctx.cfg),
        Commands::Login { rut, password } => {
            handlers::login::login(ctx, rut, password.as_deref()).await
        }
        Commands::Logout => handlers::login::logout(ctx),
        Commands::Whoami => handlers::login::whoami(ctx),
        Commands::Status => handlers::status::show(ctx).await,
        Commands::Mark { kind } => handlers::status::mark(ctx, *kind).await,
        Commands::Clock => handlers::clock::handle(ctx).await,
        Commands::Attendance {
            filters,
            kind,
            export,
        } => handlers::attendance::handle(ctx, filters, *kind, export).await,
        Commands::Licenses { action } => handlers::requests::licenses(ctx, action).await,
        Commands::Vacations { action } => handlers::requests::vacations(ctx, action).await,
        Commands::Audit {
            company,
            filters,
            action,
            export,
        } => handlers::audit::handle(ctx, *company, filters, action.as_deref(), export).await,
        Commands::Companies { assigned } => handlers::companies::companies(ctx, *assigned).await,
        Commands::Shifts { company } => handlers::companies::shifts(ctx, *company).await,
        Commands::Users { action } => handlers::users::handle(ctx, action).await,
        Commands::Profile { worker, action } => {
            handlers::profile::handle(ctx, *worker, action.as_ref()).await
        }
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load config once, then apply command-line overrides
    let mut cfg = Config::load()?;
    if let Some(url) = &cli.api_url {
        cfg.api_url = url.clone();
    }
    if let Some(file) = &cli.session {
        cfg.session_file = file.clone();
    }

    // 3️⃣ session context + transport
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(cfg.api_base()?)?);
    let session = SessionStore::hydrate(SessionStorage::new(expand_tilde(&cfg.session_file)))?;
    let mut ctx = AppContext::new(cfg, transport, session);

    // 4️⃣ dispatch
    dispatch_and_settle(&cli, &mut ctx).await
}

/// [`dispatch`], then drop the persisted session if the backend rejected
/// (or the client lacked) the access token.
pub async fn dispatch_and_settle(cli: &Cli, ctx: &mut AppContext) -> AppResult<()> {
    let result = dispatch(cli, ctx).await;
    if let Err(AppError::InvalidSession) = &result {
        match ctx.session.logout() {
            Ok(()) => debug!("session cleared after invalid token"),
            Err(e) => warn!(error = %e, "could not clear the stored session"),
        }
    }
    result
}
