use crate::export::ExportFormat;
use crate::models::{ContractType, LeaveKind, MarkType, ResolveAction};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for Kivo
#[derive(Parser)]
#[command(
    name = "kivo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Kivo attendance client: clock in/out with a live shift countdown and browse the HR console",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (e.g. http://10.0.0.5:8000/api/)
    #[arg(global = true, long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the session file (useful for tests or multiple accounts)
    #[arg(global = true, long = "session", value_name = "FILE")]
    pub session: Option<String>,

    /// Print debug diagnostics on stderr (same as KIVO_LOG=debug)
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Free-text and date filters shared by the list screens.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive match on the worker/user name
    #[arg(long, value_name = "TEXT")]
    pub name: Option<String>,

    /// Exact date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

/// Export of the rows left visible by the filters.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Write the visible rows to FILE (absolute path) instead of printing them
    #[arg(long = "export", value_name = "FILE")]
    pub file: Option<String>,

    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Overwrite the output file without confirmation
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in with RUT and password
    Login {
        /// RUT, with or without dots (12.345.678-5)
        #[arg(long)]
        rut: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user and role
    Whoami,

    /// Show today's marking status and remaining shift time
    Status,

    /// Register an entry or exit mark
    Mark {
        #[arg(value_enum)]
        kind: MarkType,
    },

    /// Interactive marking screen with a live countdown (e=entry, s=exit, r=refresh, q=quit)
    Clock,

    /// Attendance marks
    Attendance {
        #[command(flatten)]
        filters: FilterArgs,

        /// Mark type (entrada/salida)
        #[arg(long, value_enum)]
        kind: Option<MarkType>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Leave requests (licencias)
    Licenses {
        #[command(subcommand)]
        action: LicenseCmd,
    },

    /// Vacation requests
    Vacations {
        #[command(subcommand)]
        action: VacationCmd,
    },

    /// Audit trail
    Audit {
        /// Company to inspect (defaults to the configured/assigned one)
        #[arg(long)]
        company: Option<u64>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Action name (crear, actualizar, ...)
        #[arg(long)]
        action: Option<String>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// List companies
    Companies {
        /// Only companies assigned to the current user
        #[arg(long)]
        assigned: bool,
    },

    /// List the shifts of a company
    Shifts { company: u64 },

    /// User management
    Users {
        #[command(subcommand)]
        action: UserCmd,
    },

    /// Show (or edit) a worker profile
    Profile {
        worker: u64,

        #[command(subcommand)]
        action: Option<ProfileCmd>,
    },
}

#[derive(Subcommand)]
pub enum LicenseCmd {
    /// List leave requests
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum)]
        kind: Option<LeaveKind>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Request a leave
    Create {
        #[arg(long, value_enum)]
        kind: LeaveKind,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        /// Detailed reason
        #[arg(long)]
        reason: Option<String>,
    },

    /// Accept or reject a pending request
    Resolve {
        id: u64,
        #[arg(value_enum)]
        action: ResolveAction,
    },
}

#[derive(Subcommand)]
pub enum VacationCmd {
    /// List vacation requests
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// State (pendiente, aceptado, rechazado)
        #[arg(long)]
        state: Option<String>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Request vacations
    Create {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },

    /// Accept or reject a pending request
    Resolve {
        id: u64,
        #[arg(value_enum)]
        action: ResolveAction,
    },
}

#[derive(Subcommand)]
pub enum UserCmd {
    /// List the users of a company
    List {
        #[arg(long)]
        company: Option<u64>,

        #[arg(long, value_name = "TEXT")]
        name: Option<String>,

        /// Role code (trabajador, asistente_rrhh, admin_rrhh, fiscalizador)
        #[arg(long)]
        role: Option<String>,
    },

    /// Create a user (and its worker record for role trabajador)
    Create(CreateUserArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CreateUserArgs {
    #[arg(long)]
    pub rut: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Role code
    #[arg(long, default_value = "trabajador")]
    pub role: String,
    #[arg(long, default_value = "")]
    pub nombres: String,
    #[arg(long, default_value = "")]
    pub apellidos: String,
    #[arg(long, default_value = "")]
    pub cargo: String,
    #[arg(long, default_value = "")]
    pub area: String,
    #[arg(long, value_enum)]
    pub contract: Option<ContractType>,
    /// Contact e-mail of the worker
    #[arg(long, default_value = "")]
    pub correo: String,
    #[arg(long)]
    pub company: Option<u64>,
    #[arg(long)]
    pub shift: Option<u64>,
}

#[derive(Subcommand)]
pub enum ProfileCmd {
    /// Edit the profile; --motivo is stored in the audit trail
    Edit {
        #[arg(long)]
        nombres: Option<String>,
        #[arg(long)]
        apellidos: Option<String>,
        #[arg(long)]
        cargo: Option<String>,
        #[arg(long)]
        area: Option<String>,
        #[arg(long, value_enum)]
        contract: Option<ContractType>,
        #[arg(long)]
        correo: Option<String>,
        #[arg(long)]
        company: Option<u64>,
        #[arg(long, default_value = "")]
        motivo: String,
    },
}
