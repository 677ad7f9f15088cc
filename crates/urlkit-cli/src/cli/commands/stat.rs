//! `urlkit stat <path>`

use anyhow::Result;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use urlkit_core::file_attrs::{self, UNKNOWN_FILE_SIZE};

/// Seconds since the Unix epoch, or "-".
fn fmt_time(t: Option<SystemTime>) -> String {
    t.and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn run_stat(path: &Path) -> Result<()> {
    let size = file_attrs::size(path);
    println!("{}", path.display());
    println!("  Directory:   {}", file_attrs::is_directory(path));
    if size == UNKNOWN_FILE_SIZE {
        println!("  Size:        -");
    } else {
        println!("  Size:        {}", size);
    }
    println!("  Modified:    {}", fmt_time(file_attrs::modified_time(path)));
    println!("  Created:     {}", fmt_time(file_attrs::created_time(path)));
    println!("  Accessed:    {}", fmt_time(file_attrs::accessed_time(path)));
    println!("  Hidden:      {}", file_attrs::is_hidden(path));
    println!("  Writable:    {}", file_attrs::is_writable(path));
    println!(
        "  No backup:   {}",
        file_attrs::is_excluded_from_backup(path)
    );
    Ok(())
}
