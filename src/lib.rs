//! Path-safety helpers (`lib`), plus the CLI, configuration and session
//! layers behind the `pathguard` binary.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod session;

pub use cli::{resolve_inputs, ResolvedInputs};
pub use lib_mod::{
    fs::list_files,
    names::safe_name,
    paths::{resolve_real_path, safe_join},
};
