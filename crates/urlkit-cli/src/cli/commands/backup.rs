//! `urlkit backup <path> [--exclude | --include]`

use anyhow::{Context, Result};
use std::path::Path;
use urlkit_core::file_attrs;

pub fn run_backup(path: &Path, change: Option<bool>) -> Result<()> {
    if let Some(excluded) = change {
        file_attrs::set_excluded_from_backup(path, excluded)
            .with_context(|| format!("update backup exclusion of {}", path.display()))?;
    }
    let state = if file_attrs::is_excluded_from_backup(path) {
        "excluded"
    } else {
        "included"
    };
    println!("{}: {}", path.display(), state);
    Ok(())
}
