//! URL modeling for seed classification and candidate normalization.
//!
//! Extracts path extensions used as format hints and resolves candidate
//! references found in HTML against the page they came from.

mod absolutize;
mod extension;

pub use absolutize::absolutize_reference;
pub use extension::extension_from_url;
