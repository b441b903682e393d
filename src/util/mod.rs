//! Shared utilities

pub mod config;
pub mod context;
pub mod fs;
pub mod shell;

pub use config::Config;
pub use context::ResolverContext;
pub use shell::{ColorChoice, Shell, Status};
