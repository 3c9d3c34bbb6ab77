//! `logofetch snapshot <url>` – query the archive for the closest snapshot.

use anyhow::Result;
use logofetch_core::archive::{self, ArchiveOutcome};
use logofetch_core::fetch::Fetcher;
use serde_json::json;

pub async fn run_snapshot(fetcher: &Fetcher, endpoint: &str, url: &str, json: bool) -> Result<()> {
    let outcome = archive::find_snapshot(fetcher, endpoint, url).await;

    if json {
        let value = match &outcome {
            ArchiveOutcome::None => json!({ "found": false }),
            ArchiveOutcome::Image { url, format } => {
                json!({ "found": true, "kind": "image", "url": url, "format": format.to_string() })
            }
            ArchiveOutcome::Page { url } => {
                json!({ "found": true, "kind": "page", "url": url })
            }
            ArchiveOutcome::InvalidImage { url, reason } => {
                json!({ "found": true, "kind": "invalid-image", "url": url, "reason": reason.to_string() })
            }
        };
        println!("{}", value);
        return Ok(());
    }

    match outcome {
        ArchiveOutcome::None => println!("No archived snapshot found."),
        ArchiveOutcome::Image { url, format } => {
            println!("Archived {} image: {}", format, url);
        }
        ArchiveOutcome::Page { url } => println!("Archived page: {}", url),
        ArchiveOutcome::InvalidImage { url, reason } => {
            println!("Archived copy {} failed validation: {}", url, reason);
        }
    }

    Ok(())
}
