//! `logofetch validate <url>` – check a URL against the image rules.

use anyhow::Result;
use logofetch_core::fetch::Fetcher;
use logofetch_core::validate;

pub async fn run_validate(fetcher: &Fetcher, url: &str) -> Result<()> {
    match validate::validate_image_url(fetcher, url).await {
        Ok(format) => println!("OK: {} is a valid {} image", url, format),
        Err(failure) => println!("INVALID: {}", failure),
    }
    Ok(())
}
