pub mod config;
pub mod logging;

// Pipeline modules, leaf-first.
pub mod archive;
pub mod extract;
pub mod fetch;
pub mod resolve;
pub mod retry;
pub mod search;
pub mod url_model;
pub mod validate;
