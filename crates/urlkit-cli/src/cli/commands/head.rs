//! `urlkit head <url>` – full response head; unlike `size`, failures are reported.

use anyhow::{Context, Result};
use url::Url;
use urlkit_core::config::ProbeConfig;
use urlkit_core::probe::ResponseHead;
use urlkit_core::RemoteProbe;

fn print_head(head: &ResponseHead) {
    println!("  Status:         {}", head.status);
    match head.content_length {
        Some(n) => println!("  Content-Length: {}", n),
        None => println!("  Content-Length: -"),
    }
    println!(
        "  Accept-Ranges:  {}",
        if head.accept_ranges { "bytes" } else { "-" }
    );
    println!("  ETag:           {}", head.etag.as_deref().unwrap_or("-"));
    println!(
        "  Last-Modified:  {}",
        head.last_modified.as_deref().unwrap_or("-")
    );
}

pub async fn run_head(url: &Url, cfg: &ProbeConfig) -> Result<()> {
    let head = RemoteProbe::from_config(cfg)
        .head(url)
        .await
        .with_context(|| format!("HEAD {}", url))?;
    println!("{}", url);
    print_head(&head);
    Ok(())
}
