use clap::{Args, Parser, Subcommand};
use logoshare_domain::{LogoStatus, NavCategory, ViewMode};

#[derive(Parser)]
#[command(name = "logoshare")]
#[command(about = "Browse, add and share logo assets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Use the hosted backend instead of the local catalog
    #[arg(long, global = true)]
    pub backend: bool,

    /// Local catalog file (or set LOGOSHARE_FILE env var); starts from the
    /// sample logos when it does not exist yet
    #[arg(long, value_name = "FILE", env = "LOGOSHARE_FILE", global = true)]
    pub file: Option<String>,

    /// Simulated save delay for the local catalog, in milliseconds
    #[arg(long, value_name = "MS", env = "LOGOSHARE_LATENCY_MS", global = true)]
    pub latency_ms: Option<u64>,

    /// Account email for signing in to the hosted backend
    #[arg(long, env = "LOGOSHARE_EMAIL", global = true)]
    pub email: Option<String>,

    #[arg(
        long,
        env = "LOGOSHARE_PASSWORD",
        hide_env_values = true,
        global = true
    )]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List logos in a navigation category
    List(ListArgs),
    /// Get a specific logo
    Get {
        #[arg(long)]
        id: String,
    },
    /// Add a logo
    Add(AddArgs),
    /// Get a share link for a published logo, optionally inviting someone
    Share(ShareArgs),
    /// List navigation categories
    Categories,
    /// Sign in to the hosted backend (requires --backend, --email, --password)
    Login,
    /// Create an account on the hosted backend (requires --backend, --email, --password)
    Signup,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// projects, recent, starred, trash or admin
    #[arg(long, default_value = "projects")]
    pub category: NavCategory,
    /// Case-insensitive match on name, client, category, tags and style
    #[arg(long)]
    pub search: Option<String>,
    /// list (rows) or grid (cards)
    #[arg(long, default_value = "list")]
    pub view: ViewMode,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub client: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub designer: Option<String>,
    #[arg(long)]
    pub studio: Option<String>,
    #[arg(long)]
    pub licences: Option<String>,
    /// NAME=#RRGGBB, repeatable
    #[arg(long = "color", value_name = "NAME=HEX")]
    pub colors: Vec<String>,
    /// Repeatable
    #[arg(long = "font", value_name = "NAME")]
    pub fonts: Vec<String>,
    /// NAME=URL, repeatable
    #[arg(long = "link", value_name = "NAME=URL")]
    pub links: Vec<String>,
    /// draft or published
    #[arg(long, default_value = "draft")]
    pub status: LogoStatus,
}

#[derive(Args)]
pub struct ShareArgs {
    #[arg(long)]
    pub id: String,
    /// Origin used for the link, overriding the configured one
    #[arg(long)]
    pub origin: Option<String>,
    /// Email address to invite
    #[arg(long)]
    pub invite: Option<String>,
}
