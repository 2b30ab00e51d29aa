use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::store::{STORE_DIR, StoreClient};

/// `slate init`: create a fresh store in the current directory.
pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let store_dir = cwd.join(STORE_DIR);

    if store_dir.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to reinitialize)",
            store_dir.display()
        )
        .into());
    }

    let name = match args.name {
        Some(name) => name,
        None => infer_name(&cwd),
    };

    StoreClient::init(&cwd, &name)?;
    println!("initialized store '{}' in {}", name, store_dir.display());
    Ok(())
}

/// Default the store name to the directory name.
fn infer_name(dir: &Path) -> String {
    dir.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("todo")
        .to_string()
}
