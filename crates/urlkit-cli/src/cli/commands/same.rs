//! `urlkit same <a> <b>`

use anyhow::Result;
use url::Url;
use urlkit_core::is_equivalent;

pub fn run_same(a: &Url, b: &Url) -> Result<()> {
    if is_equivalent(a, b) {
        println!("equivalent");
    } else {
        println!("different");
    }
    Ok(())
}
