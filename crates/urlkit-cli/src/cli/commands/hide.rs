//! `urlkit hide <path> [--reveal]`

use anyhow::{Context, Result};
use std::path::Path;
use urlkit_core::file_attrs;

pub fn run_hide(path: &Path, hidden: bool) -> Result<()> {
    let new_path = file_attrs::set_hidden(path, hidden)
        .with_context(|| format!("rename {}", path.display()))?;
    println!("{}", new_path.display());
    Ok(())
}
