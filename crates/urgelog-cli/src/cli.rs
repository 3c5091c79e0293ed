use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use urgelog_core::VERSION;

/// Urgelog - a local-first, CLI-first urge tracker
#[derive(Parser)]
#[command(name = "urgelog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the tracker database
    #[arg(short, long, global = true, env = "URGELOG_DB")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the database will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Urge type (e.g. phone, alcohol, food)
    #[arg(value_name = "TYPE")]
    pub urge_type: Option<String>,

    /// Intensity, 1-10
    #[arg(short, long)]
    pub intensity: Option<u8>,

    /// Where it happened (e.g. home, work, friends-place)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Emotion felt; repeatable, first one is the primary emotion
    #[arg(short, long, value_name = "EMOTION")]
    pub emotion: Vec<String>,

    /// Physical sensation as TYPE:AREA (e.g. tightness:chest); repeatable
    #[arg(short, long, value_name = "TYPE:AREA")]
    pub sensation: Vec<String>,

    /// Outcome: processed, gave-in, or partial
    #[arg(short, long)]
    pub action: Option<String>,

    /// Optional free-text notes (max 500 characters)
    #[arg(long)]
    pub notes: Option<String>,

    /// When the urge occurred (ISO-8601 or "YYYY-MM-DD HH:MM"); defaults to now
    #[arg(long)]
    pub date: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New urge type
    #[arg(long)]
    pub urge_type: Option<String>,

    /// New intensity, 1-10
    #[arg(short, long)]
    pub intensity: Option<u8>,

    /// New location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Replace the emotion list; repeatable, first one is primary
    #[arg(short, long, value_name = "EMOTION")]
    pub emotion: Vec<String>,

    /// Replace the sensation list; TYPE:AREA, repeatable
    #[arg(short, long, value_name = "TYPE:AREA")]
    pub sensation: Vec<String>,

    /// New outcome: processed, gave-in, or partial
    #[arg(short, long)]
    pub action: Option<String>,

    /// New notes (pass an empty string to clear)
    #[arg(long)]
    pub notes: Option<String>,

    /// New timestamp (ISO-8601 or "YYYY-MM-DD HH:MM")
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Time window (e.g., "7d", "30d")
    #[arg(long)]
    pub last: Option<String>,

    /// Start date (ISO-8601)
    #[arg(long)]
    pub since: Option<String>,

    /// End date (ISO-8601)
    #[arg(long)]
    pub until: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output the full summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Start date (ISO-8601)
    #[arg(long)]
    pub since: Option<String>,

    /// Strip identifying fields (id, notes) and add derived time fields
    #[arg(long)]
    pub anonymized: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the tracker database
    Init(InitArgs),

    /// Log a new urge entry
    Add(AddArgs),

    /// Edit an existing entry (full replace by id)
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// List entries
    List(ListArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// Show behavioral analytics derived from all entries
    Stats(StatsArgs),

    /// Export entries (portable formats, you own your data)
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
