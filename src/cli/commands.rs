use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slate", about = concat!("[=] slate v", env!("CARGO_PKG_VERSION"), " - one to-do list, shared"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different store root
    #[arg(short = 'C', long = "store-dir", global = true)]
    pub store_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new store in the current directory
    Init(InitArgs),
    /// Add a todo
    Add(AddArgs),
    /// List todos
    List(ListArgs),
    /// Toggle a todo's completion flag
    Toggle(ToggleArgs),
    /// Delete a todo
    Rm(RmArgs),
    /// Remove all completed todos
    Clear,
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Store name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Reinitialize even if .slate/ already exists
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Filter tag: all, active, or completed (default: all)
    #[arg(long)]
    pub filter: Option<String>,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Todo title
    pub title: String,
    /// Optional description
    #[arg(long)]
    pub desc: Option<String>,
    /// Optional due date (free-form, e.g. "2025-09-01" or "friday")
    #[arg(long)]
    pub due: Option<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Todo id (a unique prefix is enough)
    pub id: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Todo id (a unique prefix is enough)
    pub id: String,
}
