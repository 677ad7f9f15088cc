//! `urlkit size <url>` and `urlkit resume <url>`.

use anyhow::Result;
use url::Url;
use urlkit_core::config::ProbeConfig;
use urlkit_core::{RemoteProbe, UNKNOWN_SIZE};

pub async fn run_size(url: &Url, cfg: &ProbeConfig) -> Result<()> {
    let size = RemoteProbe::from_config(cfg).remote_size(url).await;
    if size == UNKNOWN_SIZE {
        println!("unknown");
    } else {
        println!("{}", size);
    }
    Ok(())
}

pub async fn run_resume(url: &Url, cfg: &ProbeConfig) -> Result<()> {
    let supported = RemoteProbe::from_config(cfg)
        .supports_range_requests(url)
        .await;
    println!("{}", if supported { "yes" } else { "no" });
    Ok(())
}
