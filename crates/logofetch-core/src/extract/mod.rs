//! Candidate image extraction from HTML.
//!
//! Four strategies run over one parsed document, in fixed order: social
//! meta tags, icon link relations, inline `img` elements, and raw URL
//! scans of JSON-LD script blocks. References are resolved against the
//! page URL, deduplicated (first strategy wins), and ranked by preferred
//! format. The sort is stable, so equal ranks keep strategy order.

mod rank;
mod srcset;
mod strategies;

pub use rank::rank_key;
pub use srcset::first_srcset_url;

use std::collections::HashSet;
use std::fmt;

use scraper::Html;
use url::Url;

use crate::url_model::absolutize_reference;

/// Which extraction strategy produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// `og:image` / `twitter:image` meta tags.
    OpenGraph,
    /// `link` elements with `image_src`, `icon`, or `apple-touch-icon` rels.
    LinkRel,
    /// `img` element `src` and first `srcset` entries.
    ImgTag,
    /// Image URLs found in JSON-LD script text.
    JsonLd,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractionStrategy::OpenGraph => "open-graph",
            ExtractionStrategy::LinkRel => "link-rel",
            ExtractionStrategy::ImgTag => "img",
            ExtractionStrategy::JsonLd => "json-ld",
        };
        write!(f, "{}", name)
    }
}

/// An absolute candidate image URL with its provenance and sort key.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub url: Url,
    pub strategy: ExtractionStrategy,
    /// Format preference, lower first. See [`rank_key`].
    pub rank_key: u8,
}

/// Extracts ranked candidate image URLs from `html`.
///
/// `base` is the URL the page was fetched from (after redirects);
/// relative references resolve against it. Unparseable and non-http(s)
/// references are dropped silently.
pub fn extract_candidates(html: &str, base: &Url) -> Vec<Candidate> {
    let document = Html::parse_document(html);

    let groups = [
        (ExtractionStrategy::OpenGraph, strategies::meta_image_refs(&document)),
        (ExtractionStrategy::LinkRel, strategies::link_icon_refs(&document)),
        (ExtractionStrategy::ImgTag, strategies::img_refs(&document)),
        (ExtractionStrategy::JsonLd, strategies::json_ld_refs(&document)),
    ];

    let mut out: Vec<Candidate> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for (strategy, refs) in groups {
        for reference in refs {
            let Some(url) = absolutize_reference(base, &reference) else {
                continue;
            };
            if !seen.insert(url.as_str().to_string()) {
                continue;
            }
            let rank_key = rank_key(&url);
            out.push(Candidate {
                url,
                strategy,
                rank_key,
            });
        }
    }

    out.sort_by_key(|c| c.rank_key);
    out
}
