//! CLI command handlers. Each command is in its own file for clarity.

mod resolve;
mod snapshot;
mod validate;

pub use resolve::run_resolve;
pub use snapshot::run_snapshot;
pub use validate::run_validate;
