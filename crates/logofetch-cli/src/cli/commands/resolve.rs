//! `logofetch resolve <url>` – resolve a seed URL to a validated image URL.

use std::time::Duration;

use anyhow::Result;
use logofetch_core::resolve::{ResolveOptions, Resolver};

pub async fn run_resolve(
    resolver: &Resolver,
    url: &str,
    json: bool,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let options = ResolveOptions {
        overall_timeout: timeout_secs.map(Duration::from_secs),
    };
    let result = resolver.resolve_image_with(url, &options).await;

    if json {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    if result.success {
        // Both URLs are always present on a successful result.
        println!("Resolved: {}", result.final_url.as_deref().unwrap_or(""));
        println!("Source:   {}", result.source_url.as_deref().unwrap_or(""));
    } else {
        println!("Failed: {}", result.reason.as_deref().unwrap_or("unknown"));
    }

    Ok(())
}
