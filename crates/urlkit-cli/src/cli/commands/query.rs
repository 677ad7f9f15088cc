//! `urlkit query <url>`

use anyhow::Result;
use url::Url;
use urlkit_core::UrlExt;

pub fn run_query(url: &Url) -> Result<()> {
    let Some(params) = url.query_parameters() else {
        println!("(no query)");
        return Ok(());
    };
    let mut pairs: Vec<_> = params.into_iter().collect();
    pairs.sort();
    for (name, value) in pairs {
        println!("{}={}", name, value);
    }
    Ok(())
}
