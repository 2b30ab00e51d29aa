mod init;
pub use init::cmd_init;

use std::path::PathBuf;
use std::sync::Mutex;

use uuid::Uuid;

use crate::cli::commands::*;
use crate::cli::output::{TodoJson, format_row};
use crate::model::filter::FilterTag;
use crate::store::StoreClient;

/// Global override for the store root (set by -C flag)
static STORE_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for open_store_cwd()
    if let Some(ref dir) = cli.store_dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        STORE_DIR_OVERRIDE.lock().unwrap().replace(abs);
    }

    match cli.command {
        None => {
            // Unreachable: main launches the TUI before dispatch
            Ok(())
        }
        Some(cmd) => match cmd {
            // Init is handled in main.rs before store discovery
            Commands::Init(args) => cmd_init(args),

            // Read commands
            Commands::List(args) => cmd_list(args, json),

            // Write commands
            Commands::Add(args) => cmd_add(args),
            Commands::Toggle(args) => cmd_toggle(args),
            Commands::Rm(args) => cmd_rm(args),
            Commands::Clear => cmd_clear(),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_store_cwd() -> Result<StoreClient, Box<dyn std::error::Error>> {
    let start = match STORE_DIR_OVERRIDE.lock().unwrap().as_ref() {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let root = StoreClient::discover(&start)?;
    Ok(StoreClient::open(&root)?)
}

/// Short display form of an id (first 8 hex digits).
fn short(id: Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

fn parse_filter(s: Option<&str>) -> Result<FilterTag, String> {
    match s {
        None => Ok(FilterTag::All),
        Some(s) => FilterTag::from_str(s)
            .ok_or_else(|| format!("unknown filter '{}' (expected all, active, completed)", s)),
    }
}

/// Resolve a user-typed id, accepting any unique prefix of the hex form.
fn resolve_id(client: &StoreClient, input: &str) -> Result<Uuid, String> {
    // A full uuid parses directly
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }

    let needle = input.replace('-', "").to_lowercase();
    if needle.is_empty() {
        return Err("empty id".to_string());
    }

    let todos = client
        .query(FilterTag::All)
        .map_err(|e| format!("could not read store: {}", e))?;
    let matches: Vec<Uuid> = todos
        .iter()
        .map(|t| t.id)
        .filter(|id| id.simple().to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("no todo with id '{}'", input)),
        _ => Err(format!(
            "id '{}' is ambiguous ({} matches)",
            input,
            matches.len()
        )),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let client = open_store_cwd()?;
    let filter = parse_filter(args.filter.as_deref())?;
    let todos = client.query(filter)?;

    if json {
        let out: Vec<TodoJson> = todos.iter().map(TodoJson::from).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if todos.is_empty() {
        println!("No todos.");
        return Ok(());
    }
    for todo in &todos {
        println!("{}", format_row(todo));
    }
    let open = todos.iter().filter(|t| !t.completed).count();
    println!("{} items left", open);
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = open_store_cwd()?;
    let id = client.create(&args.title, args.desc, args.due)?;
    println!("added {}", short(id));
    Ok(())
}

fn cmd_toggle(args: ToggleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = open_store_cwd()?;
    let id = resolve_id(&client, &args.id)?;

    let todos = client.query(FilterTag::All)?;
    let current = todos
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.completed)
        .unwrap_or(false);
    client.set_completed(id, !current)?;

    println!(
        "{} {}",
        if current { "reopened" } else { "completed" },
        short(id)
    );
    Ok(())
}

fn cmd_rm(args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = open_store_cwd()?;
    let id = resolve_id(&client, &args.id)?;
    client.delete(id)?;
    println!("deleted {}", short(id));
    Ok(())
}

fn cmd_clear() -> Result<(), Box<dyn std::error::Error>> {
    let client = open_store_cwd()?;
    let count = client.clear_completed()?;
    println!("cleared {} completed", count);
    Ok(())
}
