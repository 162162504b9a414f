pub mod cli;

pub use cli::{CliError, run_from_env, run_with_io};
